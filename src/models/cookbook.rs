use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Cookbook {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year_published: i64,
    pub aesthetic_rating: i64,
    pub instagram_worthy: bool,
    pub cover_color: String,
}

impl Cookbook {
    /// Render the aesthetic rating as a row of stars, one per point.
    pub fn rating_stars(&self) -> String {
        "⭐".repeat(self.aesthetic_rating.max(0) as usize)
    }
}

/// Field tuple for an insert; the id is assigned by the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCookbook {
    pub title: String,
    pub author: String,
    pub year_published: i64,
    pub aesthetic_rating: i64,
    pub instagram_worthy: bool,
    pub cover_color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_stars_repeats_per_point() {
        let book = Cookbook {
            id: 1,
            title: "Fermented Everything".to_string(),
            author: "Jim Kombucha".to_string(),
            year_published: 2021,
            aesthetic_rating: 3,
            instagram_worthy: true,
            cover_color: "Denim".to_string(),
        };
        assert_eq!(book.rating_stars(), "⭐⭐⭐");
    }

    #[test]
    fn rating_stars_empty_for_zero_or_negative() {
        let mut book = Cookbook {
            id: 1,
            title: "Plain Toast".to_string(),
            author: "Anon".to_string(),
            year_published: 2020,
            aesthetic_rating: 0,
            instagram_worthy: false,
            cover_color: "White".to_string(),
        };
        assert_eq!(book.rating_stars(), "");
        book.aesthetic_rating = -2;
        assert_eq!(book.rating_stars(), "");
    }

    #[test]
    fn cookbook_serde_roundtrip() {
        let book = Cookbook {
            id: 7,
            title: "The Artistic Toast".to_string(),
            author: "River Wildflower".to_string(),
            year_published: 2023,
            aesthetic_rating: 5,
            instagram_worthy: true,
            cover_color: "Recycled Brown".to_string(),
        };
        let json = serde_json::to_string(&book).unwrap();
        let back: Cookbook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }
}
