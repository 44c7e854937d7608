use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Provider-assigned team identifier, immutable once ingested.
    #[sea_orm(unique)]
    pub team_id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub abbreviation: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub conference: Option<String>,
    pub division: Option<String>,
    pub arena: Option<String>,
    pub arena_capacity: Option<i32>,
    pub year_founded: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player::Entity")]
    Player,
    #[sea_orm(has_many = "super::team_season_stats::Entity")]
    TeamSeasonStats,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::team_season_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamSeasonStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
