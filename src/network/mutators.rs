//! Write actions: issue the request, then refresh what it touched.

use crate::common::{ConsoleCommand, MetaHash, PeerAddress, Resource};
use crate::render::RenderPort;

use super::api::{ApiError, ControlApi};
use super::fetchers::{checked, fetch_messages, fetch_peers, fetch_private, succeeded};

pub const DOWNLOAD_NOTICE: &str = "Your file was correctly downloaded !";

/// Runs one command coming from the UI.
pub async fn execute(
    api: &dyn ControlApi,
    render: &dyn RenderPort,
    command: ConsoleCommand,
) -> Result<(), ApiError> {
    match command {
        ConsoleCommand::SendPublic { text } => send_public_message(api, render, &text).await,
        ConsoleCommand::SendPrivate { text, peer } => {
            send_private_message(api, render, &text, &peer).await
        }
        ConsoleCommand::AddPeer(address) => add_peer(api, render, &address).await,
        ConsoleCommand::RequestFile {
            file_name,
            hash,
            dest,
        } => request_file(api, render, &file_name, &hash, &dest).await,
        ConsoleCommand::IndexFile { file_name } => index_file(api, render, &file_name).await,
        ConsoleCommand::RefreshPrivate => fetch_private(api, render).await,
    }
}

pub async fn send_public_message(
    api: &dyn ControlApi,
    render: &dyn RenderPort,
    text: &str,
) -> Result<(), ApiError> {
    checked(render, Resource::Messages, api.send_message(text).await).await?;
    log::info!("Public message sent");
    fetch_messages(api, render).await
}

pub async fn send_private_message(
    api: &dyn ControlApi,
    render: &dyn RenderPort,
    text: &str,
    peer: &str,
) -> Result<(), ApiError> {
    checked(render, Resource::Private, api.send_private(text, peer).await).await?;
    log::info!("Private message sent to {peer}");
    fetch_private(api, render).await
}

pub async fn add_peer(
    api: &dyn ControlApi,
    render: &dyn RenderPort,
    address: &PeerAddress,
) -> Result<(), ApiError> {
    let endpoint = address.to_string();
    checked(render, Resource::Peers, api.add_peer(&endpoint).await).await?;
    log::info!("Peer {endpoint} added");
    fetch_peers(api, render).await
}

/// The node answers once the download finished, with the updated index.
pub async fn request_file(
    api: &dyn ControlApi,
    render: &dyn RenderPort,
    file_name: &str,
    hash: &MetaHash,
    dest: &str,
) -> Result<(), ApiError> {
    let result = api.request_file(file_name, hash.as_str(), dest).await;
    let files = checked(render, Resource::Files, result).await?;
    log::info!("Downloaded {file_name} ({hash}) from {dest:?}");
    render.render_files(files).await;
    succeeded(render, Resource::Files).await?;
    render.notify(DOWNLOAD_NOTICE.to_string()).await;
    Ok(())
}

pub async fn index_file(
    api: &dyn ControlApi,
    render: &dyn RenderPort,
    file_name: &str,
) -> Result<(), ApiError> {
    let files = checked(render, Resource::Files, api.index_file(file_name).await).await?;
    log::info!("Indexed {file_name}");
    render.render_files(files).await;
    succeeded(render, Resource::Files).await
}
