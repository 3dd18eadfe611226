use actix_web::{delete, get, post, put, web, HttpResponse};
use anyhow::anyhow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};
use crate::model::{ActorChanges, CreatedResponse, NewFilmographyLink};
use crate::{db, DbPool};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorPayload {
    pub name: String,
    pub bio: String,
    pub born_at: NaiveDate,
    #[serde(default)]
    pub filmography: Option<Vec<FilmographyEntry>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FilmographyEntry {
    pub movie: i32,
    pub plays: String,
}

#[get("/actors")]
pub async fn get_all(pool: web::Data<DbPool>) -> Result<HttpResponse> {
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let actors = web::block(move || db::list_actors(&mut conn)).await??;
    Ok(HttpResponse::Ok().json(actors))
}

#[get("/actors/{id}")]
pub async fn get(pool: web::Data<DbPool>, path: web::Path<i32>) -> Result<HttpResponse> {
    let actor_id = path.into_inner();
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let found = web::block(move || db::find_actor(&mut conn, actor_id)).await??;
    match found {
        Some(actor) => Ok(HttpResponse::Ok().json(actor)),
        None => Err(ApiError::NotFound),
    }
}

#[post("/actors")]
pub async fn post(pool: web::Data<DbPool>, payload: web::Json<ActorPayload>) -> Result<HttpResponse> {
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let payload = payload.into_inner();
    let id = web::block(move || db::create_actor(&mut conn, payload)).await??;
    Ok(HttpResponse::Created().json(CreatedResponse {
        id,
        path: format!("/actors/{}", id),
    }))
}

#[put("/actors/{id}")]
pub async fn put(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    payload: web::Json<ActorChanges>,
) -> Result<HttpResponse> {
    let actor_id = path.into_inner();
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let changes = payload.into_inner();
    let found = web::block(move || db::update_actor(&mut conn, actor_id, changes)).await??;
    if found {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ApiError::NotFound)
    }
}

#[delete("/actors/{id}")]
pub async fn remove(pool: web::Data<DbPool>, path: web::Path<i32>) -> Result<HttpResponse> {
    let actor_id = path.into_inner();
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let found = web::block(move || db::remove_actor(&mut conn, actor_id)).await??;
    if found {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ApiError::NotFound)
    }
}

#[get("/actors/{id}/filmography")]
pub async fn get_filmography(pool: web::Data<DbPool>, path: web::Path<i32>) -> Result<HttpResponse> {
    let actor_id = path.into_inner();
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let appearances = web::block(move || db::actor_filmography(&mut conn, actor_id)).await??;
    Ok(HttpResponse::Ok().json(appearances))
}

#[get("/actors/filmography/{id}")]
pub async fn get_filmography_entry(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let link_id = path.into_inner();
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let links = web::block(move || db::filmography_entry(&mut conn, link_id)).await??;
    Ok(HttpResponse::Ok().json(links))
}

#[get("/actors/{id}/moviesCountByGenre")]
pub async fn get_movies_count_by_genre(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let actor_id = path.into_inner();
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let counts = web::block(move || db::movies_count_by_genre(&mut conn, actor_id)).await??;
    Ok(HttpResponse::Ok().json(counts))
}

#[post("/actors/filmography")]
pub async fn post_filmography(
    pool: web::Data<DbPool>,
    payload: web::Json<NewFilmographyLink>,
) -> Result<HttpResponse> {
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let link = payload.into_inner();
    let id = web::block(move || db::add_to_filmography(&mut conn, link)).await??;
    Ok(HttpResponse::Created().json(CreatedResponse {
        id,
        path: format!("/actors/filmography/{}", id),
    }))
}

#[delete("/actors/filmography/{id}")]
pub async fn remove_filmography(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let link_id = path.into_inner();
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let found = web::block(move || db::remove_from_filmography(&mut conn, link_id)).await??;
    if found {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actor_payload_deserializes_with_filmography() {
        let payload: ActorPayload = serde_json::from_str(
            r#"{"name":"Keanu Reeves","bio":"Actor","bornAt":"1964-09-02",
                "filmography":[{"movie":3,"plays":"Neo"}]}"#,
        )
        .unwrap();
        assert_eq!(payload.name, "Keanu Reeves");
        assert_eq!(
            payload.born_at,
            NaiveDate::from_ymd_opt(1964, 9, 2).unwrap()
        );
        let filmography = payload.filmography.unwrap();
        assert_eq!(filmography.len(), 1);
        assert_eq!(filmography[0].movie, 3);
        assert_eq!(filmography[0].plays, "Neo");
    }

    #[test]
    fn actor_payload_filmography_is_optional() {
        let payload: ActorPayload = serde_json::from_str(
            r#"{"name":"Keanu Reeves","bio":"Actor","bornAt":"1964-09-02"}"#,
        )
        .unwrap();
        assert!(payload.filmography.is_none());
    }

    #[test]
    fn filmography_link_payload_deserializes() {
        let link: NewFilmographyLink =
            serde_json::from_str(r#"{"actor":1,"movie":3,"plays":"Neo"}"#).unwrap();
        assert_eq!(link.actor, 1);
        assert_eq!(link.movie, 3);
        assert_eq!(link.plays, "Neo");
    }
}
