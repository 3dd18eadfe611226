use diesel::{
    Connection, ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl,
    SelectableHelper,
};

use crate::actors::ActorPayload;
use crate::error::Result;
use crate::model::{
    Actor, ActorChanges, Appearance, FilmographyLink, GenreMovieCount, Movie, MovieChanges,
    NewActor, NewFilmographyLink, NewMovie,
};

pub fn list_actors(conn: &mut PgConnection) -> Result<Vec<Actor>> {
    use crate::schema::actor::dsl::*;

    let rows = actor.select(Actor::as_select()).load(conn)?;
    Ok(rows)
}

pub fn find_actor(conn: &mut PgConnection, actor_id: i32) -> Result<Option<Actor>> {
    use crate::schema::actor::dsl::*;

    let found = actor
        .filter(id.eq(actor_id))
        .select(Actor::as_select())
        .first(conn)
        .optional()?;
    Ok(found)
}

/// Returns the id of the created actor. When the payload carries filmography
/// entries, the actor row and all of its links are inserted in one
/// transaction: a failing link insert rolls the actor back too.
pub fn create_actor(conn: &mut PgConnection, input: ActorPayload) -> Result<i32> {
    use crate::schema::actor::dsl::actor;
    use crate::schema::movie_actor::dsl::movie_actor;

    let new_actor = NewActor {
        name: input.name,
        bio: input.bio,
        born_at: input.born_at,
    };
    let filmography = input.filmography.unwrap_or_default();

    if filmography.is_empty() {
        let new_id = diesel::insert_into(actor)
            .values(&new_actor)
            .returning(crate::schema::actor::id)
            .get_result(conn)?;
        return Ok(new_id);
    }

    let new_id = conn.transaction::<_, diesel::result::Error, _>(|conn| {
        let new_id: i32 = diesel::insert_into(actor)
            .values(&new_actor)
            .returning(crate::schema::actor::id)
            .get_result(conn)?;
        let links: Vec<NewFilmographyLink> = filmography
            .into_iter()
            .map(|entry| NewFilmographyLink {
                movie: entry.movie,
                actor: new_id,
                plays: entry.plays,
            })
            .collect();
        diesel::insert_into(movie_actor).values(&links).execute(conn)?;
        Ok(new_id)
    })?;
    Ok(new_id)
}

/// Returns whether the id was actually found. An empty payload performs no
/// update but still reports existence.
pub fn update_actor(conn: &mut PgConnection, actor_id: i32, changes: ActorChanges) -> Result<bool> {
    use crate::schema::actor::dsl::*;

    if changes.is_empty() {
        let found = actor
            .filter(id.eq(actor_id))
            .select(id)
            .first::<i32>(conn)
            .optional()?;
        return Ok(found.is_some());
    }
    let updated = diesel::update(actor.filter(id.eq(actor_id)))
        .set(&changes)
        .execute(conn)?;
    Ok(updated > 0)
}

/// Returns whether the id was actually found. Filmography links referencing
/// the actor are removed by the database (ON DELETE CASCADE).
pub fn remove_actor(conn: &mut PgConnection, actor_id: i32) -> Result<bool> {
    use crate::schema::actor::dsl::*;

    let deleted = diesel::delete(actor.filter(id.eq(actor_id))).execute(conn)?;
    Ok(deleted > 0)
}

pub fn actor_filmography(conn: &mut PgConnection, actor_id: i32) -> Result<Vec<Appearance>> {
    use crate::schema::actor_appearances::dsl::*;

    let rows = actor_appearances
        .filter(actor.eq(actor_id))
        .select(Appearance::as_select())
        .load(conn)?;
    Ok(rows)
}

pub fn filmography_entry(conn: &mut PgConnection, link_id: i32) -> Result<Vec<FilmographyLink>> {
    use crate::schema::movie_actor::dsl::*;

    let rows = movie_actor
        .filter(id.eq(link_id))
        .select(FilmographyLink::as_select())
        .load(conn)?;
    Ok(rows)
}

/// Returns the id of the created link. Inserting a (movie, actor) pair that
/// is already linked surfaces as a duplicate-key error.
pub fn add_to_filmography(conn: &mut PgConnection, link: NewFilmographyLink) -> Result<i32> {
    use crate::schema::movie_actor::dsl::movie_actor;

    let new_id = diesel::insert_into(movie_actor)
        .values(&link)
        .returning(crate::schema::movie_actor::id)
        .get_result(conn)?;
    Ok(new_id)
}

/// Returns whether the id was actually found.
pub fn remove_from_filmography(conn: &mut PgConnection, link_id: i32) -> Result<bool> {
    use crate::schema::movie_actor::dsl::*;

    let deleted = diesel::delete(movie_actor.filter(id.eq(link_id))).execute(conn)?;
    Ok(deleted > 0)
}

/// Number of movies per genre for one actor, most-represented genre first.
pub fn movies_count_by_genre(
    conn: &mut PgConnection,
    actor_id: i32,
) -> Result<Vec<GenreMovieCount>> {
    use crate::schema::actor_appearances::dsl::*;
    use diesel::dsl::count;

    let counts = actor_appearances
        .filter(actor.eq(actor_id))
        .group_by(genre)
        .select((genre, count(movie)))
        .order_by(count(movie).desc())
        .load::<GenreMovieCount>(conn)?;
    Ok(counts)
}

pub fn list_movies(conn: &mut PgConnection) -> Result<Vec<Movie>> {
    use crate::schema::movie::dsl::*;

    let rows = movie.select(Movie::as_select()).load(conn)?;
    Ok(rows)
}

pub fn find_movie(conn: &mut PgConnection, movie_id: i32) -> Result<Option<Movie>> {
    use crate::schema::movie::dsl::*;

    let found = movie
        .filter(id.eq(movie_id))
        .select(Movie::as_select())
        .first(conn)
        .optional()?;
    Ok(found)
}

/// Returns the id of the created movie. A nonexistent genre surfaces as a
/// referential-integrity error.
pub fn create_movie(conn: &mut PgConnection, input: NewMovie) -> Result<i32> {
    use crate::schema::movie::dsl::movie;

    let new_id = diesel::insert_into(movie)
        .values(&input)
        .returning(crate::schema::movie::id)
        .get_result(conn)?;
    Ok(new_id)
}

/// Returns whether the id was actually found.
pub fn update_movie(conn: &mut PgConnection, movie_id: i32, changes: MovieChanges) -> Result<bool> {
    use crate::schema::movie::dsl::*;

    if changes.is_empty() {
        let found = movie
            .filter(id.eq(movie_id))
            .select(id)
            .first::<i32>(conn)
            .optional()?;
        return Ok(found.is_some());
    }
    let updated = diesel::update(movie.filter(id.eq(movie_id)))
        .set(&changes)
        .execute(conn)?;
    Ok(updated > 0)
}

/// Returns whether the id was actually found.
pub fn remove_movie(conn: &mut PgConnection, movie_id: i32) -> Result<bool> {
    use crate::schema::movie::dsl::*;

    let deleted = diesel::delete(movie.filter(id.eq(movie_id))).execute(conn)?;
    Ok(deleted > 0)
}
