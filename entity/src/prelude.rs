pub use super::game::Entity as Game;
pub use super::game_stats::Entity as GameStats;
pub use super::player::Entity as Player;
pub use super::player_season_stats::Entity as PlayerSeasonStats;
pub use super::team::Entity as Team;
pub use super::team_season_stats::Entity as TeamSeasonStats;
