use regex::Regex;
use std::{fmt, sync::LazyLock};

static SPRING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"@(?:Rest)?Controller\b|@RequestMapping\b|@(?:Get|Post|Put|Delete|Patch)Mapping\b",
    )
    .unwrap()
});

static JAXRS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@Path\b|@(?:GET|POST|PUT|DELETE)\b").unwrap());

static SERVLET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@WebServlet\b|extends\s+HttpServlet\b").unwrap()
});

/// Route declaration conventions recognized in Java sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Spring MVC / Spring Boot controller annotations
    Spring,
    /// JAX-RS resource annotations (Jersey, RESTEasy)
    JaxRs,
    /// Servlet API annotations and subclasses
    Servlet,
}

impl Dialect {
    /// Every dialect in sniffing priority order.
    pub const ALL: [Dialect; 3] = [Dialect::Spring, Dialect::JaxRs, Dialect::Servlet];

    /// Classify a file by the first dialect whose markers appear in it.
    pub fn sniff(content: &str) -> Option<Dialect> {
        Self::ALL
            .into_iter()
            .find(|dialect| dialect.marker_regex().is_match(content))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Spring => "spring",
            Dialect::JaxRs => "jaxrs",
            Dialect::Servlet => "servlet",
        }
    }

    fn marker_regex(&self) -> &'static Regex {
        match self {
            Dialect::Spring => &*SPRING_REGEX,
            Dialect::JaxRs => &*JAXRS_REGEX,
            Dialect::Servlet => &*SERVLET_REGEX,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
