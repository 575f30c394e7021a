//! Library catalogue walk-through.
//!
//! Builds an in-memory database, validates and inserts a few rows, then
//! reads them back through the decoder registry.
//!
//! Run with: cargo run --example library

use sqlx::sqlite::SqlitePoolOptions;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use shelf_sql::{quoted, Statement};
use shelf_store::{DecoderRegistry, PersonKind, Record, Store, TableId};
use shelf_validate::{ColumnRule, RowValidator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    sqlx::query(
        "CREATE TABLE AUTHOR (
            AUTHOR_ID INTEGER PRIMARY KEY,
            FIRST_NAME TEXT NOT NULL,
            LAST_NAME TEXT NOT NULL
        )",
    )
    .execute(&pool)
    .await?;

    let store = Store::with_pool(pool, DecoderRegistry::with_defaults());

    // Writes go through validation first.
    let author_rules = RowValidator::new()
        .column(ColumnRule::text("FIRST_NAME", 20))
        .column(ColumnRule::text("LAST_NAME", 30));

    for (first_name, last_name) in [("Frank", "Herbert"), ("Ursula", "Le Guin")] {
        let affected = store
            .validated_insert(TableId::Author, &author_rules, &[first_name, last_name])
            .await?;
        println!("inserted {affected} row(s) for {first_name} {last_name}");
    }

    // A rejected row never reaches the database.
    let rejected = store
        .validated_insert(TableId::Author, &author_rules, &["Flann", "O'Brien"])
        .await;
    println!("quoted name rejected: {}", rejected.unwrap_err());

    // Reads decode positionally through the registry.
    let sql = Statement::select()
        .table(TableId::Author.name())
        .condition(&format!("LAST_NAME = {}", quoted("Herbert")))
        .render()?;
    for record in store.fetch(TableId::Author, &sql).await {
        if let Record::Author(author) = record {
            println!("found #{}: {} {}", author.id, author.first_name, author.last_name);
        }
    }

    let id = store.person_id("Ursula Le Guin", PersonKind::Author).await;
    println!("Ursula Le Guin has id {id:?}");

    Ok(())
}
