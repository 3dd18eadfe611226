use actix_web::{delete, get, post, put, web, HttpResponse};
use anyhow::anyhow;

use crate::error::{ApiError, Result};
use crate::model::{CreatedResponse, MovieChanges, NewMovie};
use crate::{db, DbPool};

#[get("/movies")]
pub async fn get_all(pool: web::Data<DbPool>) -> Result<HttpResponse> {
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let movies = web::block(move || db::list_movies(&mut conn)).await??;
    Ok(HttpResponse::Ok().json(movies))
}

#[get("/movies/{id}")]
pub async fn get(pool: web::Data<DbPool>, path: web::Path<i32>) -> Result<HttpResponse> {
    let movie_id = path.into_inner();
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let found = web::block(move || db::find_movie(&mut conn, movie_id)).await??;
    match found {
        Some(movie) => Ok(HttpResponse::Ok().json(movie)),
        None => Err(ApiError::NotFound),
    }
}

#[post("/movies")]
pub async fn post(pool: web::Data<DbPool>, payload: web::Json<NewMovie>) -> Result<HttpResponse> {
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let payload = payload.into_inner();
    let id = web::block(move || db::create_movie(&mut conn, payload)).await??;
    Ok(HttpResponse::Created().json(CreatedResponse {
        id,
        path: format!("/movies/{}", id),
    }))
}

#[put("/movies/{id}")]
pub async fn put(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    payload: web::Json<MovieChanges>,
) -> Result<HttpResponse> {
    let movie_id = path.into_inner();
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let changes = payload.into_inner();
    let found = web::block(move || db::update_movie(&mut conn, movie_id, changes)).await??;
    if found {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ApiError::NotFound)
    }
}

#[delete("/movies/{id}")]
pub async fn remove(pool: web::Data<DbPool>, path: web::Path<i32>) -> Result<HttpResponse> {
    let movie_id = path.into_inner();
    let mut conn = pool
        .get()
        .map_err(|_| anyhow!("Couldn't get db connection from pool."))?;
    let found = web::block(move || db::remove_movie(&mut conn, movie_id)).await??;
    if found {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ApiError::NotFound)
    }
}
