use sea_orm::entity::prelude::*;

/// Per-season team aggregates, one row per (team, season, season type).
/// Overwritten wholesale on re-ingestion.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "team_season_stats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub team_id: i32,
    pub season: i32,
    pub season_type: String,
    pub games_played: i32,
    pub wins: i32,
    pub losses: i32,
    pub win_pct: Option<f64>,
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
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id"
    )]
    Team,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
