//! Built-in framework signatures. Adding a framework is a data change here.
use crate::detection::types::FrameworkSignature;

pub const SPRING_BOOT: FrameworkSignature = FrameworkSignature {
    name: "spring_boot",
    files: &[
        "src/main/resources/application.properties",
        "src/main/resources/application.yml",
        "src/main/resources/application.yaml",
    ],
    dependencies: &["spring-boot-starter-web", "spring-boot-starter-parent"],
    annotations: &["@SpringBootApplication", "@RestController"],
    classes: &[],
};

pub const SPRING_MVC: FrameworkSignature = FrameworkSignature {
    name: "spring_mvc",
    files: &[
        "src/main/webapp/WEB-INF/[servlet]-servlet.xml",
        "src/main/webapp/WEB-INF/applicationContext.xml",
    ],
    dependencies: &["spring-webmvc", "spring-web"],
    annotations: &["@Controller", "@RequestMapping", "@GetMapping"],
    classes: &[],
};

pub const JERSEY: FrameworkSignature = FrameworkSignature {
    name: "jersey",
    files: &[],
    dependencies: &["jersey-server", "jersey-container-servlet", "jersey-core"],
    annotations: &["@Path", "@GET", "@POST"],
    classes: &[],
};

pub const RESTEASY: FrameworkSignature = FrameworkSignature {
    name: "resteasy",
    files: &[],
    dependencies: &["resteasy-jaxrs", "resteasy-spring"],
    annotations: &["@Path"],
    classes: &[],
};

pub const STRUTS2: FrameworkSignature = FrameworkSignature {
    name: "struts2",
    files: &[
        "src/main/webapp/WEB-INF/struts.xml",
        "src/main/resources/struts.xml",
    ],
    dependencies: &["struts2-core", "struts2-convention-plugin"],
    annotations: &[],
    classes: &["ActionSupport", "com.opensymphony.xwork2."],
};

pub const SERVLET: FrameworkSignature = FrameworkSignature {
    name: "servlet",
    files: &["src/main/webapp/WEB-INF/web.xml"],
    dependencies: &[],
    annotations: &["@WebServlet", "@WebFilter"],
    classes: &[],
};

/// Every known signature, in tie-breaking order.
pub const SIGNATURES: &[FrameworkSignature] =
    &[SPRING_BOOT, SPRING_MVC, JERSEY, RESTEASY, STRUTS2, SERVLET];
