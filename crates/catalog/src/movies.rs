//! The fixed movie catalog.
//!
//! Order here is display order on the listing page.

use crate::types::Movie;

pub static MOVIES: &[Movie] = &[
    Movie {
        title: "Inception",
        suggestions: &[
            "Mind-bending and brilliant!",
            "Confusing and overrated",
            "Great visuals and story",
            "Too complicated for me",
            "Absolutely loved the soundtrack",
        ],
    },
    Movie {
        title: "The Godfather",
        suggestions: &[
            "A masterpiece of cinema",
            "Slow and boring",
            "Perfect acting and direction",
            "Not my kind of movie",
            "Classic gangster storytelling",
        ],
    },
    Movie {
        title: "Avengers: Endgame",
        suggestions: &[
            "Epic and emotional",
            "Too long and messy",
            "Best superhero movie",
            "Not as good as previous ones",
            "Amazing fan-service",
        ],
    },
    Movie {
        title: "Titanic",
        suggestions: &[
            "Heartbreaking and beautiful",
            "Romantic but slow",
            "A timeless love story",
            "Too sentimental",
            "Great performances",
        ],
    },
    Movie {
        title: "Parasite",
        suggestions: &[
            "Sharp, dark and brilliant",
            "Weird and uncomfortable",
            "Perfectly crafted thriller",
            "Not for everyone",
            "Masterful social commentary",
        ],
    },
];

/// All catalog movies in display order
pub fn movies() -> &'static [Movie] {
    MOVIES
}

/// Look up a catalog movie by its exact title
pub fn find_movie(title: &str) -> Option<&'static Movie> {
    MOVIES.iter().find(|movie| movie.title == title)
}
