//! # Page Templates
//!
//! Pages are minijinja templates kept as standalone `.html` files and
//! compiled into the binary. The `.html` names turn on HTML auto-escaping,
//! so movie titles and user text render literally.
//!
//! Display decisions (which style a message gets) are made here in Rust and
//! handed to the templates as plain values.

use minijinja::{context, Environment, Error};

use catalog::MovieRating;

use crate::orchestrator::MoviePage;

pub const BASE_TEMPLATE: &str = include_str!("../templates/base.html");
pub const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
pub const MOVIE_TEMPLATE: &str = include_str!("../templates/movie.html");

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        env.add_template("base.html", BASE_TEMPLATE)?;
        env.add_template("index.html", INDEX_TEMPLATE)?;
        env.add_template("movie.html", MOVIE_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Listing of every movie with its rating
    pub fn render_index(&self, movies: &[MovieRating]) -> Result<String, Error> {
        self.env
            .get_template("index.html")?
            .render(context! { movies => movies })
    }

    pub fn render_movie(&self, page: &MoviePage) -> Result<String, Error> {
        let message_class = page.prediction.map(|p| p.name()).unwrap_or("notice");
        self.env.get_template("movie.html")?.render(context! {
            title => page.movie.title,
            suggestions => page.movie.suggestions,
            info => &page.rating,
            message => &page.message,
            message_class => message_class,
        })
    }
}
