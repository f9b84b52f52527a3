use askama::Template;

#[derive(Template)]
#[template(path = "public/page.html")]
pub struct PublicPageTemplate {
    pub lang: &'static str,
    pub dir: &'static str,
    pub title: String,
    pub slug: String,
    pub alternate_locale: &'static str,
    pub body: String,
}

#[derive(Template)]
#[template(path = "public/not_found.html")]
pub struct NotFoundTemplate {
    pub lang: &'static str,
    pub dir: &'static str,
}
