use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::activity::repository::{mock::InMemoryActivityRepository, SeaOrmActivityRepository};
use service::activity::ActivityService;
use service::auth::TokenDecoder;
use service::ong::repository::{mock::InMemoryOngRepository, SeaOrmOngRepository};
use service::ong::OngService;
use service::user::repository::{mock::InMemoryUserRepository, SeaOrmUserRepository};
use service::user::UserService;

/// Shared handler state.
#[derive(Clone)]
pub struct ServerState {
    pub activities: Arc<ActivityService>,
    pub ongs: Arc<OngService>,
    pub users: Arc<UserService>,
    pub tokens: Arc<TokenDecoder>,
}

impl ServerState {
    /// Services backed by Postgres through SeaORM.
    pub fn from_db(db: DatabaseConnection, tokens: TokenDecoder) -> Self {
        Self {
            activities: Arc::new(ActivityService::new(Arc::new(SeaOrmActivityRepository { db: db.clone() }))),
            ongs: Arc::new(OngService::new(Arc::new(SeaOrmOngRepository { db: db.clone() }))),
            users: Arc::new(UserService::new(Arc::new(SeaOrmUserRepository { db }))),
            tokens: Arc::new(tokens),
        }
    }

    /// Services backed by in-memory maps; nothing survives a restart.
    pub fn in_memory(tokens: TokenDecoder) -> Self {
        Self {
            activities: Arc::new(ActivityService::new(Arc::new(InMemoryActivityRepository::new()))),
            ongs: Arc::new(OngService::new(Arc::new(InMemoryOngRepository::new()))),
            users: Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new()))),
            tokens: Arc::new(tokens),
        }
    }
}
