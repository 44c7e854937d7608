use sea_orm::entity::prelude::*;

/// Per-season player averages, one row per (player, season, season type).
/// Overwritten wholesale on re-ingestion.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "player_season_stats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_id: i32,
    /// Team the player was rostered on for the season; NULL when the
    /// provider does not attribute the season to a team.
    pub team_id: Option<i32>,
    pub season: i32,
    pub season_type: String,
    pub games_played: i32,
    pub games_started: i32,
    pub minutes_per_game: Option<f64>,
    pub points_per_game: Option<f64>,
    pub rebounds_per_game: Option<f64>,
    pub assists_per_game: Option<f64>,
    pub steals_per_game: Option<f64>,
    pub blocks_per_game: Option<f64>,
    pub turnovers_per_game: Option<f64>,
    pub fg_pct: Option<f64>,
    pub fg3_pct: Option<f64>,
    pub ft_pct: Option<f64>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id"
    )]
    Player,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id"
    )]
    Team,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
