use mongodb::{Client, Collection, Database};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}

pub async fn init(uri: &str, name: &str) -> anyhow::Result<AppState> {
    let client = Client::with_uri_str(uri).await?;
    let db = client.database(name);

    tracing::info!("Connected to MongoDB database {}", name);

    Ok(AppState { db })
}
