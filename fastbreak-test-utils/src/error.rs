use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    ApiError(#[from] nba_api::Error),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
