//! Development seeding: wipes both tables and inserts a fixed set of
//! rooms and questions through the store accessors.

use anyhow::Context;
use askboard::{
    config::Config,
    db,
    questions::store::QuestionStore,
    rooms::store::RoomStore,
};

const ROOMS: &[(&str, Option<&str>, &[&str])] = &[
    (
        "Standup",
        Some("Daily sync"),
        &["What shipped yesterday?", "Any blockers?"],
    ),
    (
        "Architecture",
        Some("Long-form design discussions"),
        &["Why an outer join for the counts?"],
    ),
    ("Random", None, &[]),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;
    let db_pool = db::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    db::migrate(&db_pool).await?;

    sqlx::query("DELETE FROM questions").execute(&db_pool).await?;
    sqlx::query("DELETE FROM rooms").execute(&db_pool).await?;

    let rooms = RoomStore::new(&db_pool);
    let questions = QuestionStore::new(&db_pool);
    for (name, description, room_questions) in ROOMS {
        let room = rooms.create(name, *description).await?;
        for question in *room_questions {
            questions.create(&room.id, question).await?;
        }
    }

    log::info!("seeded {} rooms", ROOMS.len());
    Ok(())
}
