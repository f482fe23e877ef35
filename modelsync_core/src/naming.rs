//! Naming conventions shared by the generators and the reconciler.

use convert_case::{Case, Casing};

/// `blog_post` / `blogPost` / `BlogPost` -> `BlogPost`
pub fn pascal_case(ident: &str) -> String {
    ident.to_case(Case::Pascal)
}

/// `BlogPost` / `blogPost` / `blog_post` -> `blog_post`
pub fn snake_case(ident: &str) -> String {
    ident.to_case(Case::Snake)
}
