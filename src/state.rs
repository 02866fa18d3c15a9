use crate::auth::{Jwt, JwtTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, TransactionTrait};
use std::{env, sync::Arc};
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone;
    type Jwt: JwtTrait;

    fn db(&self) -> &Self::Db;
    fn jwt(&self) -> &Self::Jwt;
}

pub struct State {
    database: DbConn,
    jwt: Jwt,
}

impl State {
    pub async fn new() -> Arc<Self> {
        Self::with_database(Self::connect_database().await).await
    }

    pub async fn with_database(conn: DbConn) -> Arc<Self> {
        Arc::new(Self {
            database: conn,
            jwt: Jwt::new(),
        })
    }

    async fn connect_database() -> DbConn {
        info!("Trying to connect to database");

        let url = env::var("DATABASE_URL").expect("DATABASE_URL is not set");
        let mut opts = ConnectOptions::new(url);
        opts.sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts)
            .await
            .expect("failed to connect to database");

        info!("Connected to database");

        db
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;
    type Jwt = Jwt;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn jwt(&self) -> &Self::Jwt {
        &self.jwt
    }
}
