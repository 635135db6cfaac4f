// ABOUTME: Declarative route metadata consumed by an external router.
// ABOUTME: Data only; the handler itself lives on Client (see book.rs).

use once_cell::sync::Lazy;
use serde::Serialize;

/// Capability flags a host checks before mounting a route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Features {
    pub require_config: bool,
    pub require_puppeteer: bool,
    pub anti_crawler: bool,
    pub support_bt: bool,
    pub support_podcast: bool,
    pub support_scihub: bool,
}

/// Maps an upstream site URL pattern to a route for auto-discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadarRule {
    pub source: &'static [&'static str],
    pub target: &'static str,
}

/// Documentation for one route parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: &'static str,
    pub description: &'static str,
}

/// A route descriptor: path template, docs, capability flags, discovery rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub categories: &'static [&'static str],
    pub example: &'static str,
    pub parameters: &'static [Parameter],
    pub maintainers: &'static [&'static str],
    pub features: Features,
    pub radar: &'static [RadarRule],
}

/// The book listing route.
pub static BOOK_ROUTE: Lazy<Route> = Lazy::new(|| Route {
    path: "/book/:category/page/:page",
    name: "一本",
    categories: &["blog"],
    example: "/book/day-book",
    parameters: &[
        Parameter {
            name: "category",
            description: "分类，默认为每日一本",
        },
        Parameter {
            name: "page",
            description: "页码，默认为 1",
        },
    ],
    maintainers: &["LonelySteve"],
    features: Features::default(),
    radar: &[
        RadarRule {
            source: &["b.iacg.site"],
            target: "/book",
        },
        RadarRule {
            source: &["b.iacg.site"],
            target: "/book/:category",
        },
    ],
});
