//! One read operation per resource kind.
//!
//! Each fetch is independent: it either replaces the rendered view of its
//! resource or leaves it untouched and reports the failure.

use crate::common::Resource;
use crate::render::RenderPort;

use super::api::{ApiError, ControlApi};

pub async fn fetch_identity(api: &dyn ControlApi, render: &dyn RenderPort) -> Result<(), ApiError> {
    let identity = checked(render, Resource::Identity, api.identity().await).await?;
    render.render_identity(identity).await;
    succeeded(render, Resource::Identity).await
}

pub async fn fetch_messages(api: &dyn ControlApi, render: &dyn RenderPort) -> Result<(), ApiError> {
    let rumors = checked(render, Resource::Messages, api.messages().await).await?;
    render.render_messages(rumors).await;
    succeeded(render, Resource::Messages).await
}

/// Fetches every conversation; the UI keeps only the selected peer's.
pub async fn fetch_private(api: &dyn ControlApi, render: &dyn RenderPort) -> Result<(), ApiError> {
    let conversations = checked(render, Resource::Private, api.private_messages().await).await?;
    render.render_private(conversations).await;
    succeeded(render, Resource::Private).await
}

pub async fn fetch_peers(api: &dyn ControlApi, render: &dyn RenderPort) -> Result<(), ApiError> {
    let peers = checked(render, Resource::Peers, api.peers().await).await?;
    render.render_peers(peers).await;
    succeeded(render, Resource::Peers).await
}

pub async fn fetch_names(api: &dyn ControlApi, render: &dyn RenderPort) -> Result<(), ApiError> {
    let names = checked(render, Resource::Names, api.names().await).await?;
    render.render_names(names).await;
    succeeded(render, Resource::Names).await
}

pub async fn fetch_files(api: &dyn ControlApi, render: &dyn RenderPort) -> Result<(), ApiError> {
    let files = checked(render, Resource::Files, api.indexed_files().await).await?;
    render.render_files(files).await;
    succeeded(render, Resource::Files).await
}

/// Logs and reports a failed request; a successful value is handed back for rendering.
pub(crate) async fn checked<T>(
    render: &dyn RenderPort,
    resource: Resource,
    result: Result<T, ApiError>,
) -> Result<T, ApiError> {
    let error = result.as_ref().err().map(ToString::to_string);
    if let Some(error) = error {
        log::warn!("Request for {resource} failed: {error}");
        render.report(resource, Some(error)).await;
    }
    result
}

pub(crate) async fn succeeded(render: &dyn RenderPort, resource: Resource) -> Result<(), ApiError> {
    render.report(resource, None).await;
    Ok(())
}
