//! List movies command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_list_movies(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let movies = store.list_movies().await?;

    if movies.is_empty() {
        println!("No movies in the catalogue.");
        println!();
        println!("Load the fixtures with: cinedex seed");
        return Ok(());
    }

    println!("Movies ({} total)", movies.len());
    println!("{:-<70}", "");

    for movie in movies {
        let explicit = if movie.explicit { " [explicit]" } else { "" };
        println!("{:>4}  {}{}", movie.id, movie.name, explicit);
        println!("      Genre: {} | Rating: {}", movie.genre, movie.rating);
    }

    Ok(())
}
