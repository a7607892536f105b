//! Common test helper functions shared across test modules.
//!
//! Provides fixture builders for on-disk Java projects so detection and
//! scanning tests can describe a project as a list of files.
use std::{fs, path::Path};
use tempfile::TempDir;

/// Writes `content` to `relative` under `root`, creating parent directories.
///
/// # Example
/// ```ignore
/// write_file(root, "src/main/java/App.java", "public class App {}");
/// ```
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Creates a temporary project containing the given `(path, content)` files.
///
/// # Example
/// ```ignore
/// let project = create_test_project(&[("pom.xml", "<project/>")]);
/// ```
pub fn create_test_project(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (relative, content) in files {
        write_file(temp_dir.path(), relative, content);
    }
    temp_dir
}

/// A Spring Boot controller with a class-level base path and one route per
/// parameter kind.
pub const USER_CONTROLLER: &str = r#"package com.acme.web;

import org.springframework.web.bind.annotation.*;

@RequestMapping("/api")
@RestController
public class UserController {

    @GetMapping("/users/{id}")
    public User getUser(@PathVariable("id") Long id) {
        return users.find(id);
    }

    @PostMapping("/users")
    public User createUser(@RequestBody User user, @RequestHeader("X-Request-Id") String requestId) {
        return users.save(user);
    }

    @RequestMapping(value = "/users/search", method = RequestMethod.GET)
    public List<User> search(@RequestParam("q") String q, @RequestParam(value = "page", required = false) Integer page) {
        return users.search(q, page);
    }
}
"#;

/// A JAX-RS resource, recognized but not parsed for routes.
pub const JAXRS_RESOURCE: &str = r#"package com.acme.rs;

@Path("/items")
public class ItemResource {
    @GET
    @Path("/{id}")
    public Item get(@PathParam("id") String id) {
        return null;
    }
}
"#;

/// A classic annotated servlet, recognized but not parsed for routes.
pub const LEGACY_SERVLET: &str = r#"package com.acme.legacy;

@WebServlet("/legacy")
public class LegacyServlet extends HttpServlet {
    public void doGet(HttpServletRequest req, HttpServletResponse resp) {
    }
}
"#;
