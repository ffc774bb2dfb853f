use axum::{extract::State, http::header, response::IntoResponse};

use crate::{error::AppResult, models::Product, state::AppState};

const STATIC_PAGES: [(&str, &str, &str); 4] = [
    ("/", "daily", "1.0"),
    ("/products", "daily", "0.9"),
    ("/about", "monthly", "0.5"),
    ("/contact", "monthly", "0.5"),
];

#[utoipa::path(
    get,
    path = "/sitemap.xml",
    responses(
        (status = 200, description = "XML sitemap of the storefront", content_type = "application/xml", body = String)
    ),
    tag = "SEO"
)]
pub async fn sitemap(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let products = state.storage.get_all_products().await?;
    let body = render_sitemap(&state.config.base_url, &products);
    Ok(([(header::CONTENT_TYPE, "application/xml")], body))
}

#[utoipa::path(
    get,
    path = "/robots.txt",
    responses(
        (status = 200, description = "Crawler rules", content_type = "text/plain", body = String)
    ),
    tag = "SEO"
)]
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_robots(&state.config.base_url),
    )
}

pub fn render_sitemap(base_url: &str, products: &[Product]) -> String {
    let base = base_url.trim_end_matches('/');
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for (path, changefreq, priority) in STATIC_PAGES {
        push_url(&mut xml, &format!("{base}{path}"), None, changefreq, priority);
    }
    for product in products {
        let lastmod = product.created_at.format("%Y-%m-%d").to_string();
        push_url(
            &mut xml,
            &format!("{base}/products/{}", product.id),
            Some(&lastmod),
            "weekly",
            "0.8",
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

fn push_url(xml: &mut String, loc: &str, lastmod: Option<&str>, changefreq: &str, priority: &str) {
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(loc)));
    if let Some(lastmod) = lastmod {
        xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
    }
    xml.push_str(&format!("    <changefreq>{changefreq}</changefreq>\n"));
    xml.push_str(&format!("    <priority>{priority}</priority>\n"));
    xml.push_str("  </url>\n");
}

pub fn render_robots(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    format!(
        "User-agent: *\nAllow: /\nDisallow: /auth\nDisallow: /admin\n\nSitemap: {base}/sitemap.xml\n"
    )
}

fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
