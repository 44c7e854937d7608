pub use sea_orm_migration::prelude::*;

mod m20260115_000001_team;
mod m20260115_000002_player;
mod m20260115_000003_game;
mod m20260115_000004_team_season_stats;
mod m20260115_000005_player_season_stats;
mod m20260115_000006_game_stats;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_team::Migration),
            Box::new(m20260115_000002_player::Migration),
            Box::new(m20260115_000003_game::Migration),
            Box::new(m20260115_000004_team_season_stats::Migration),
            Box::new(m20260115_000005_player_season_stats::Migration),
            Box::new(m20260115_000006_game_stats::Migration),
        ]
    }
}
