use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Provider-assigned player identifier, immutable once ingested.
    #[sea_orm(unique)]
    pub player_id: String,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Current team; NULL for free agents or retired players.
    pub team_id: Option<i32>,
    pub position: Option<String>,
    pub height: Option<String>,
    pub weight: Option<i32>,
    pub birth_date: Option<Date>,
    pub college: Option<String>,
    pub draft_year: Option<i32>,
    pub draft_round: Option<i32>,
    pub draft_number: Option<i32>,
    pub jersey_number: Option<String>,
    pub is_active: bool,
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
    #[sea_orm(has_many = "super::player_season_stats::Entity")]
    PlayerSeasonStats,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::player_season_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerSeasonStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
