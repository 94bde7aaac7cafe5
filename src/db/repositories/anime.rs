use crate::domain::{AnimeId, PageRequest};
use crate::entities::{animes, prelude::*};
use crate::models::anime::{AnimeChanges, AnimeFilter, NewAnime};
use sea_orm::sea_query::{Alias, Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    NotSet, QueryFilter, QueryOrder, QuerySelect, Set,
};

pub struct AnimeRepository {
    conn: DatabaseConnection,
}

impl AnimeRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn insert(&self, anime: &NewAnime) -> Result<animes::Model, DbErr> {
        let active_model = animes::ActiveModel {
            id: NotSet,
            name: Set(anime.name.clone()),
            summary: Set(anime.summary.clone()),
            director: Set(anime.director.clone()),
            active: Set(anime.active),
        };

        active_model.insert(&self.conn).await
    }

    pub async fn get(&self, id: AnimeId) -> Result<Option<animes::Model>, DbErr> {
        Animes::find_by_id(id.value()).one(&self.conn).await
    }

    pub async fn list_active(
        &self,
        filter: &AnimeFilter,
        page: PageRequest,
    ) -> Result<Vec<animes::Model>, DbErr> {
        let mut query = Animes::find().filter(animes::Column::Active.eq(true));

        if let Some(name) = filter.name() {
            query = query.filter(contains(animes::Column::Name, name));
        }

        if let Some(director) = filter.director() {
            query = query.filter(contains(animes::Column::Director, director));
        }

        if let Some(summary) = filter.summary() {
            query = query.filter(contains(animes::Column::Summary, summary));
        }

        query
            .order_by_asc(animes::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.conn)
            .await
    }

    pub async fn apply_changes(
        &self,
        current: animes::Model,
        changes: &AnimeChanges,
    ) -> Result<animes::Model, DbErr> {
        if changes.is_empty() {
            return Ok(current);
        }

        let mut active_model = current.into_active_model();

        if let Some(name) = &changes.name {
            active_model.name = Set(name.clone());
        }

        if let Some(director) = &changes.director {
            active_model.director = Set(Some(director.clone()));
        }

        if let Some(summary) = &changes.summary {
            active_model.summary = Set(Some(summary.clone()));
        }

        active_model.update(&self.conn).await
    }

    pub async fn deactivate(&self, current: animes::Model) -> Result<animes::Model, DbErr> {
        let mut active_model = current.into_active_model();
        active_model.active = Set(false);
        active_model.update(&self.conn).await
    }
}

/// Case-sensitive substring match. `LIKE` folds ASCII case in SQLite, `instr` does not.
fn contains(column: animes::Column, needle: &str) -> SimpleExpr {
    Expr::expr(
        Func::cust(Alias::new("instr"))
            .arg(Expr::col((Animes, column)))
            .arg(Expr::val(needle)),
    )
    .gt(0)
}
