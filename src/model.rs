use chrono::NaiveDate;
use diesel::{AsChangeset, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

use crate::schema::*;

#[derive(Debug, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = actor)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: i32,
    pub name: String,
    pub bio: String,
    pub born_at: NaiveDate,
}

#[derive(Debug, PartialEq, Insertable)]
#[diesel(table_name = actor)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewActor {
    pub name: String,
    pub bio: String,
    pub born_at: NaiveDate,
}

#[derive(Debug, Default, AsChangeset, Deserialize)]
#[diesel(table_name = actor)]
#[serde(rename_all = "camelCase")]
pub struct ActorChanges {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub born_at: Option<NaiveDate>,
}

impl ActorChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.bio.is_none() && self.born_at.is_none()
    }
}

#[derive(Debug, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = movie)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i32,
    pub name: String,
    pub synopsis: Option<String>,
    pub released_at: NaiveDate,
    /// Runtime in minutes.
    pub runtime: i32,
    pub genre: i32,
}

#[derive(Debug, PartialEq, Insertable, Deserialize)]
#[diesel(table_name = movie)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    pub name: String,
    pub synopsis: Option<String>,
    pub released_at: NaiveDate,
    pub runtime: i32,
    pub genre: i32,
}

#[derive(Debug, Default, AsChangeset, Deserialize)]
#[diesel(table_name = movie)]
#[serde(rename_all = "camelCase")]
pub struct MovieChanges {
    pub name: Option<String>,
    pub synopsis: Option<String>,
    pub released_at: Option<NaiveDate>,
    pub runtime: Option<i32>,
    pub genre: Option<i32>,
}

impl MovieChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.synopsis.is_none()
            && self.released_at.is_none()
            && self.runtime.is_none()
            && self.genre.is_none()
    }
}

/// One role played by one actor in one movie. The pair (movie, actor) is
/// unique at the database level.
#[derive(Debug, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = movie_actor)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FilmographyLink {
    pub id: i32,
    pub movie: i32,
    pub actor: i32,
    pub plays: String,
}

#[derive(Debug, PartialEq, Insertable, Deserialize)]
#[diesel(table_name = movie_actor)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewFilmographyLink {
    pub movie: i32,
    pub actor: i32,
    pub plays: String,
}

/// Row of the `actor_appearances` view, minus the actor id it is filtered by.
#[derive(Debug, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = actor_appearances)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    pub movie: String,
    pub synopsis: Option<String>,
    pub released_at: NaiveDate,
    pub plays: String,
    pub runtime: i32,
    pub genre: String,
}

#[derive(Debug, PartialEq, Queryable, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreMovieCount {
    pub genre: String,
    pub num_movies: i64,
}

/// Body returned by the POST endpoints: the generated id plus the path the
/// new resource can be fetched at.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i32,
    pub path: String,
}
