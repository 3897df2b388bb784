//! Content DTOs fetched from the backend, plus the bundled fallback
//! datasets substituted when a fetch fails. The backend owns all of this
//! data; these shapes only mirror what its JSON endpoints return.

use chrono::NaiveDate;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config;

/// Served from the site bundle; swapped in for any missing/broken image.
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.webp";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    pub quote: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceItem {
    pub id: u32,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
    pub icon_key: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectTag {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub slug: String,
    pub summary: String,
    #[serde(default)]
    pub hero: Option<String>,
    #[serde(default)]
    pub tags: Vec<ProjectTag>,
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GalleryItem {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

/// Lead-capture payload for the blog "work with us" card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscribeRequest {
    pub name: String,
    pub phone: String,
    pub interest: String,
}

/// Contact page payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub topic: String,
    pub country: String,
    pub phone: String,
    pub message: String,
}

/// Shared submission lifecycle for both lead forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

// ---------------------------------------------------------------------------
// fetch helpers

async fn get_json<T: for<'de> Deserialize<'de>>(path: &str) -> Result<T, gloo_net::Error> {
    let url = format!("{}{}", config::get_backend_url(), path);
    let response = Request::get(&url).send().await?;
    if !response.ok() {
        return Err(gloo_net::Error::GlooError(format!(
            "{} returned status {}",
            path,
            response.status()
        )));
    }
    response.json().await
}

pub async fn fetch_blog_posts() -> Result<Vec<BlogPost>, gloo_net::Error> {
    get_json("/api/blog/posts/").await
}

pub async fn fetch_testimonials() -> Result<Vec<Testimonial>, gloo_net::Error> {
    get_json("/api/home/testimonials/").await
}

pub async fn fetch_services() -> Result<Vec<ServiceItem>, gloo_net::Error> {
    get_json("/api/services/").await
}

pub async fn fetch_projects() -> Result<Vec<Project>, gloo_net::Error> {
    get_json("/api/portfolio/projects/").await
}

pub async fn fetch_gallery() -> Result<Vec<GalleryItem>, gloo_net::Error> {
    get_json("/api/portfolio/gallery/").await
}

pub async fn submit_subscription(request: &SubscribeRequest) -> Result<(), gloo_net::Error> {
    let url = format!("{}/api/blog/subscribe/", config::get_backend_url());
    let response = Request::post(&url).json(request)?.send().await?;
    if !response.ok() {
        return Err(gloo_net::Error::GlooError(format!(
            "subscribe returned status {}",
            response.status()
        )));
    }
    Ok(())
}

pub async fn submit_contact(request: &ContactRequest) -> Result<(), gloo_net::Error> {
    let url = format!("{}/api/contact/", config::get_backend_url());
    let response = Request::post(&url).json(request)?.send().await?;
    if !response.ok() {
        return Err(gloo_net::Error::GlooError(format!(
            "contact returned status {}",
            response.status()
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// mapping helpers

/// Resolve a backend image reference. Absolute URLs pass through,
/// backend-relative paths (`/media/...`) are joined onto `base`, and a
/// missing reference falls back to the bundled placeholder.
pub fn resolve_media_url(base: &str, path: Option<&str>) -> String {
    match path {
        None => PLACEHOLDER_IMAGE.to_string(),
        Some("") => PLACEHOLDER_IMAGE.to_string(),
        Some(p) if p.starts_with("http://") || p.starts_with("https://") => p.to_string(),
        Some(p) if p.starts_with('/') => format!("{}{}", base, p),
        Some(p) => format!("{}/{}", base, p),
    }
}

/// Drop inactive projects and order the rest (featured first, then by the
/// backend's explicit ordering field).
pub fn active_sorted(mut projects: Vec<Project>) -> Vec<Project> {
    projects.retain(|p| p.is_active);
    projects.sort_by(|a, b| b.featured.cmp(&a.featured).then(a.order.cmp(&b.order)));
    projects
}

/// Backend dates arrive as `YYYY-MM-DD`; display them like "Oct 06, 2025".
/// Anything unparseable is shown as-is.
pub fn format_post_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%b %d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// `mailto:` fallback for when the contact endpoint is unreachable.
pub fn contact_mailto(subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        config::CONTACT_EMAIL,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

// ---------------------------------------------------------------------------
// fallback datasets

pub fn fallback_blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            title: "Designing Scalable Design Systems".into(),
            date: "2025-10-06".into(),
            tag: Some("Design".into()),
            image: Some("/assets/blog/design-systems.webp".into()),
            content: Some(
                "How we build component libraries that stay consistent while the \
                 product around them keeps changing."
                    .into(),
            ),
        },
        BlogPost {
            id: 2,
            title: "Performance-first Frontend Patterns".into(),
            date: "2025-09-21".into(),
            tag: Some("Engineering".into()),
            image: Some("/assets/blog/performance.webp".into()),
            content: Some(
                "Rendering, data fetching and bundle-size techniques we apply on \
                 every client build."
                    .into(),
            ),
        },
        BlogPost {
            id: 3,
            title: "Creative Direction for Product Videos".into(),
            date: "2025-08-30".into(),
            tag: Some("Motion".into()),
            image: Some("/assets/blog/product-video.webp".into()),
            content: Some(
                "From concept to final cut: crafting product stories that \
                 actually convert."
                    .into(),
            ),
        },
    ]
}

pub fn fallback_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: 1,
            name: "Priya Raghavan".into(),
            role: Some("CTO".into()),
            quote: "They rebuilt our ordering platform in three months and it has \
                    run without a single incident since."
                .into(),
            avatar: None,
            company: Some("Kovai Foods".into()),
        },
        Testimonial {
            id: 2,
            name: "Daniel Mathew".into(),
            role: Some("Founder".into()),
            quote: "The only agency we've worked with that treats performance \
                    budgets as seriously as visuals."
                .into(),
            avatar: None,
            company: Some("Brightlane Logistics".into()),
        },
        Testimonial {
            id: 3,
            name: "Sara Thomas".into(),
            role: Some("Head of Product".into()),
            quote: "Clear communication, clean architecture, and they shipped a \
                    week early."
                .into(),
            avatar: None,
            company: Some("Medleaf Health".into()),
        },
    ]
}

pub fn fallback_services() -> Vec<ServiceItem> {
    vec![
        ServiceItem {
            id: 1,
            title: "Custom Software".into(),
            slug: "custom-software".into(),
            short_description: "Backend systems, integrations and internal tools \
                                built around your workflows."
                .into(),
            long_description: "We design and build bespoke platforms: clean \
                               domain models, secure integrations and cloud \
                               deployments that scale with the business."
                .into(),
            icon_key: "code".into(),
            color: None,
        },
        ServiceItem {
            id: 2,
            title: "Web & App Development".into(),
            slug: "web-app-development".into(),
            short_description: "Fast, accessible websites and mobile apps with \
                                measurable performance."
                .into(),
            long_description: "From marketing sites to full product frontends, \
                               we ship interfaces that stay fast on real-world \
                               devices and networks."
                .into(),
            icon_key: "mobile".into(),
            color: None,
        },
        ServiceItem {
            id: 3,
            title: "UI/UX Design".into(),
            slug: "ui-ux-design".into(),
            short_description: "Research-driven interface design, from flows to \
                                polished design systems."
                .into(),
            long_description: "We prototype early, test with users and hand over \
                               design systems your team can actually maintain."
                .into(),
            icon_key: "ux".into(),
            color: None,
        },
        ServiceItem {
            id: 4,
            title: "Motion & Product Video".into(),
            slug: "motion-product-video".into(),
            short_description: "Launch videos and product motion that explain \
                                and sell."
                .into(),
            long_description: "Storyboards, animation and edit: everything a \
                               launch needs to land."
                .into(),
            icon_key: "video".into(),
            color: None,
        },
        ServiceItem {
            id: 5,
            title: "Digital Marketing".into(),
            slug: "digital-marketing".into(),
            short_description: "Campaigns and SEO grounded in analytics, not \
                                guesswork."
                .into(),
            long_description: "Positioning, content and paid campaigns measured \
                               end to end."
                .into(),
            icon_key: "marketing".into(),
            color: None,
        },
    ]
}

pub fn fallback_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "QMA Logistics Platform".into(),
            slug: "qma-logistics".into(),
            summary: "Dispatch, tracking and billing for a 400-vehicle fleet, \
                      consolidated into one dashboard."
                .into(),
            hero: Some("/assets/portfolio/qma.webp".into()),
            tags: vec![
                ProjectTag { name: "Platform".into(), slug: "platform".into() },
                ProjectTag { name: "Cloud".into(), slug: "cloud".into() },
            ],
            external_url: None,
            featured: true,
            order: 1,
            is_active: true,
        },
        Project {
            id: 2,
            title: "Medleaf Patient Portal".into(),
            slug: "medleaf-portal".into(),
            summary: "Appointment booking and records access for a regional \
                      clinic network."
                .into(),
            hero: Some("/assets/portfolio/medleaf.webp".into()),
            tags: vec![ProjectTag { name: "Healthcare".into(), slug: "healthcare".into() }],
            external_url: None,
            featured: true,
            order: 2,
            is_active: true,
        },
        Project {
            id: 3,
            title: "Brightlane Brand & Site".into(),
            slug: "brightlane-site".into(),
            summary: "Identity refresh and a marketing site that tripled inbound \
                      leads in a quarter."
                .into(),
            hero: Some("/assets/portfolio/brightlane.webp".into()),
            tags: vec![ProjectTag { name: "Design".into(), slug: "design".into() }],
            external_url: None,
            featured: false,
            order: 3,
            is_active: true,
        },
    ]
}

pub fn fallback_gallery() -> Vec<GalleryItem> {
    vec![
        GalleryItem {
            id: 1,
            title: "Kovai Foods ordering app".into(),
            image: Some("/assets/gallery/kovai.webp".into()),
            tag: Some("Mobile".into()),
        },
        GalleryItem {
            id: 2,
            title: "Warehouse analytics dashboard".into(),
            image: Some("/assets/gallery/warehouse.webp".into()),
            tag: Some("Dashboards".into()),
        },
        GalleryItem {
            id: 3,
            title: "Conference launch teaser".into(),
            image: Some("/assets/gallery/teaser.webp".into()),
            tag: Some("Motion".into()),
        },
        GalleryItem {
            id: 4,
            title: "Retail POS integration".into(),
            image: None,
            tag: Some("Integrations".into()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_media_url() {
        let base = "http://127.0.0.1:8000";
        assert_eq!(resolve_media_url(base, None), PLACEHOLDER_IMAGE);
        assert_eq!(resolve_media_url(base, Some("")), PLACEHOLDER_IMAGE);
        assert_eq!(
            resolve_media_url(base, Some("https://cdn.example.com/a.png")),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(
            resolve_media_url(base, Some("/media/blog/a.png")),
            "http://127.0.0.1:8000/media/blog/a.png"
        );
        assert_eq!(
            resolve_media_url(base, Some("media/blog/a.png")),
            "http://127.0.0.1:8000/media/blog/a.png"
        );
    }

    #[test]
    fn test_blog_post_decoding_tolerates_missing_fields() {
        let raw = r#"[{"id": 7, "title": "Hello", "date": "2025-01-04"},
                      {"id": 8, "title": "World", "date": "2025-02-11",
                       "tag": "News", "image": "/media/x.png",
                       "content": "body", "author": "ignored"}]"#;
        let posts: Vec<BlogPost> = serde_json::from_str(raw).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].tag, None);
        assert_eq!(posts[1].image.as_deref(), Some("/media/x.png"));
    }

    #[test]
    fn test_project_decoding_and_ordering() {
        let raw = r#"[
            {"id": 1, "title": "A", "slug": "a", "summary": "", "order": 5,
             "featured": false, "is_active": true},
            {"id": 2, "title": "B", "slug": "b", "summary": "", "order": 9,
             "featured": true, "is_active": true,
             "tags": [{"name": "Web", "slug": "web"}]},
            {"id": 3, "title": "C", "slug": "c", "summary": "", "order": 1,
             "featured": false, "is_active": false}
        ]"#;
        let projects: Vec<Project> = serde_json::from_str(raw).unwrap();
        let sorted = active_sorted(projects);
        // inactive dropped, featured first, then by order
        assert_eq!(
            sorted.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![2, 1]
        );
        assert_eq!(sorted[0].tags[0].slug, "web");
    }

    #[test]
    fn test_format_post_date() {
        assert_eq!(format_post_date("2025-10-06"), "Oct 06, 2025");
        assert_eq!(format_post_date("Oct 06, 2025"), "Oct 06, 2025");
    }

    #[test]
    fn test_fallback_datasets_are_usable() {
        assert!(!fallback_blog_posts().is_empty());
        assert!(!fallback_testimonials().is_empty());
        assert!(!fallback_services().is_empty());
        assert!(!fallback_gallery().is_empty());
        // every fallback project must survive the same filtering the
        // backend data goes through
        let projects = active_sorted(fallback_projects());
        assert_eq!(projects.len(), fallback_projects().len());
        assert!(projects[0].featured);
    }

    #[test]
    fn test_contact_mailto_encodes_payload() {
        let href = contact_mailto("Project inquiry", "Name: A B\nPhone: +91 9");
        assert!(href.starts_with("mailto:hello@intasolutions.in?subject="));
        assert!(href.contains("Project%20inquiry"));
        assert!(!href.contains('\n'));
    }

    #[test]
    fn test_subscribe_payload_shape() {
        let body = serde_json::to_value(SubscribeRequest {
            name: "Asha".into(),
            phone: "+91 90000 00000".into(),
            interest: "Web / App Development".into(),
        })
        .unwrap();
        assert_eq!(body["name"], "Asha");
        assert_eq!(body["phone"], "+91 90000 00000");
        assert_eq!(body["interest"], "Web / App Development");
    }
}
