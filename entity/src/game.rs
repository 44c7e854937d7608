use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "game")]
pub struct Model {
    /// Provider game identifier, used directly as the primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub game_date: Date,
    /// Season starting year, e.g. 2023 for the 2023-24 season.
    pub season: i32,
    pub season_type: String,
    pub home_team_id: Option<i32>,
    pub away_team_id: Option<i32>,
    pub home_team_abbr: String,
    pub away_team_abbr: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub home_win: Option<bool>,
    pub arena: Option<String>,
    pub attendance: Option<i32>,
    pub home_rest_days: Option<i32>,
    pub away_rest_days: Option<i32>,
    pub home_back_to_back: bool,
    pub away_back_to_back: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::HomeTeamId",
        to = "super::team::Column::Id"
    )]
    HomeTeam,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::AwayTeamId",
        to = "super::team::Column::Id"
    )]
    AwayTeam,
    #[sea_orm(has_many = "super::game_stats::Entity")]
    GameStats,
}

impl Related<super::game_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
