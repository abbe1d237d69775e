//! Admin route pages.
//!
//! Pages are pure composition: each awaits its route parameters once and
//! returns the locale wrapper with the section's tab as its only child.
//! Validation and data loading happen before a page runs.

use crate::error::AppError;
use crate::i18n::Locale;
use crate::view::{Node, Section};
use std::future::Future;

/// Parameters extracted from a `/{locale}/admin/...` route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteParams {
    pub locale: Locale,
}

/// Render an admin section once its parameters resolve.
pub async fn section_page<P>(section: Section, params: P) -> Result<Node, AppError>
where
    P: Future<Output = Result<RouteParams, AppError>>,
{
    let RouteParams { locale } = params.await?;
    Ok(Node::LocaleWrapper {
        locale,
        children: vec![Node::Tab(section)],
    })
}

pub async fn categories_page<P>(params: P) -> Result<Node, AppError>
where
    P: Future<Output = Result<RouteParams, AppError>>,
{
    section_page(Section::Categories, params).await
}

pub async fn products_page<P>(params: P) -> Result<Node, AppError>
where
    P: Future<Output = Result<RouteParams, AppError>>,
{
    section_page(Section::Products, params).await
}

/// Admin landing page listing every section.
pub async fn index_page<P>(params: P) -> Result<Node, AppError>
where
    P: Future<Output = Result<RouteParams, AppError>>,
{
    let RouteParams { locale } = params.await?;
    Ok(Node::LocaleWrapper {
        locale,
        children: vec![Node::SectionIndex],
    })
}
