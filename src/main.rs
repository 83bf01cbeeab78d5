use cookshelf::models::NewCookbook;
use cookshelf::{db, CookbookStore};

fn sample_cookbooks() -> Vec<NewCookbook> {
    let rows = [
        (
            "Foraged & Found: A Guide to Pretending You Know About Mushrooms",
            "Oak Wavelength",
            2023,
            5,
            true,
            "Forest Green",
        ),
        (
            "Small Batch: 50 Recipes You Will Never Actually Make",
            "Sage Moonbeam",
            2022,
            4,
            true,
            "Raw Linen",
        ),
        (
            "The Artistic Toast: Advanced Avocado Techniques",
            "River Wildflower",
            2023,
            5,
            true,
            "Recycled Brown",
        ),
        ("Fermented Everything", "Jim Kombucha", 2021, 3, true, "Denim"),
        (
            "The Deconstructed Sandwich: Making Simple Things Complicated",
            "Juniper Vinegar-Smith",
            2023,
            5,
            true,
            "Beige",
        ),
    ];

    rows.into_iter()
        .map(
            |(title, author, year_published, aesthetic_rating, instagram_worthy, cover_color)| {
                NewCookbook {
                    title: title.to_string(),
                    author: author.to_string(),
                    year_published,
                    aesthetic_rating,
                    instagram_worthy,
                    cover_color: cover_color.to_string(),
                }
            },
        )
        .collect()
}

/// Insert the sample shelf: five cookbooks, tags on the first and third,
/// one borrow. Individual failures are logged and the rest proceed.
async fn seed(store: &CookbookStore) {
    println!("\nCurating your cookbook collection...");

    let mut ids = Vec::new();
    for book in sample_cookbooks() {
        match store.insert_cookbook(&book).await {
            Ok(id) => {
                println!("Added \"{}\" with id {id}", book.title);
                ids.push(Some(id));
            }
            Err(e) => {
                tracing::error!("failed to add {:?}: {e}", book.title);
                ids.push(None);
            }
        }
    }

    let tag_sets: [&[&str]; 2] = [&["gluten-free", "foraging"], &["avocado", "gluten-free"]];
    for (slot, tags) in [0, 2].into_iter().zip(tag_sets) {
        if let Some(id) = ids.get(slot).copied().flatten() {
            if let Err(e) = store.add_tags(id, tags).await {
                tracing::error!("failed to tag cookbook {id}: {e}");
            }
        }
    }

    if let Some(id) = ids.first().copied().flatten() {
        let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
        match store.record_borrow(id, "Willow Burnette", &today).await {
            Ok(_) => println!("Lent cookbook {id} to Willow Burnette"),
            Err(e) => tracing::error!("failed to record borrow for cookbook {id}: {e}"),
        }
    }
}

async fn print_shelf(store: &CookbookStore) {
    let books = match store.list_cookbooks().await {
        Ok(books) => books,
        Err(e) => {
            tracing::error!("failed to read collection: {e}");
            return;
        }
    };

    println!("\nYour carefully curated collection:");
    for book in books {
        println!("ID: {}", book.id);
        println!("Title: {}", book.title);
        println!("Author: {}", book.author);
        println!("Published: {}", book.year_published);
        println!("Aesthetic Rating: {}", book.rating_stars());
        println!(
            "Instagram Worthy: {}",
            if book.instagram_worthy { "📷" } else { "Not aesthetic enough" }
        );
        println!("Cover Color: {}", book.cover_color);

        match store.tags_for(book.id).await {
            Ok(tags) if !tags.is_empty() => {
                let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
                println!("Tags: {}", names.join(", "));
            }
            Ok(_) => {}
            Err(e) => tracing::error!("failed to read tags for cookbook {}: {e}", book.id),
        }

        match store.borrow_history(book.id).await {
            Ok(history) => {
                for record in history {
                    let status = match &record.return_date {
                        Some(date) => format!("returned {date}"),
                        None => "not yet returned".to_string(),
                    };
                    println!(
                        "Borrowed by {} on {} ({status})",
                        record.friend_name, record.date_borrowed
                    );
                }
            }
            Err(e) => tracing::error!("failed to read borrow history for cookbook {}: {e}", book.id),
        }

        println!("---");
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite:data/cookshelf.db".to_string());

    let pool = match db::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("{e}");
            println!("Could not open the cookbook database; nothing to show.");
            return;
        }
    };

    let store = CookbookStore::new(pool);

    if let Err(e) = store.initialize().await {
        // Keep going; later statements fail individually if the schema
        // is incomplete.
        tracing::error!("{e}");
    }

    // The samples are only for first run against a fresh file.
    match store.list_cookbooks().await {
        Ok(books) if books.is_empty() => seed(&store).await,
        Ok(_) => println!("Shelf already stocked, skipping samples."),
        Err(e) => tracing::error!("failed to check shelf: {e}"),
    }

    print_shelf(&store).await;

    store.pool().close().await;
    println!("\nShelf closed for the evening.");
}
