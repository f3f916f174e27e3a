use aids::{ops, ClientConfig, DatasetService, DatasetStore};
use clap::ArgMatches;

use crate::{i32_arg, string_arg};

use std::error::Error;
use std::io::Write;
use std::sync::Arc;

pub fn process(matches: &ArgMatches, dataset_matches: &ArgMatches) {
    let result: Result<(), Box<dyn Error>>
            = match dataset_matches.subcommand() {
        Some(("chart", chart_matches)) =>
            chart(matches, dataset_matches, chart_matches),
        Some(("delete", delete_matches)) =>
            delete(matches, dataset_matches, delete_matches),
        Some(("download", download_matches)) =>
            download(matches, dataset_matches, download_matches),
        Some(("list", list_matches)) =>
            list(matches, dataset_matches, list_matches),
        Some(("summary", summary_matches)) =>
            summary(matches, dataset_matches, summary_matches),
        Some(("upload", upload_matches)) =>
            upload(matches, dataset_matches, upload_matches),
        Some((cmd, _)) => Err(format!("unknown subcommand '{}'", cmd).into()),
        None => Err("missing subcommand".into()),
    };

    if let Err(e) = result {
        println!("{}", e);
    }
}

fn connect(matches: &ArgMatches) -> Result<aids::AidsClient, Box<dyn Error>> {
    let config = ClientConfig::with_base_url(string_arg(matches, "base_url")?);
    Ok(aids::connect(&config)?)
}

#[tokio::main]
async fn chart(matches: &ArgMatches, _: &ArgMatches,
        chart_matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    // initialize grpc client
    let client = connect(matches)?;

    // retrieve reply
    let reply = ops::get_chart(&client, i32_arg(chart_matches, "ID")?,
        string_arg(chart_matches, "X_AXIS")?,
        string_arg(chart_matches, "Y_AXIS")?).await?;

    println!("{}", reply.chart_data);
    Ok(())
}

#[tokio::main]
async fn delete(matches: &ArgMatches, _: &ArgMatches,
        delete_matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    // initialize grpc client
    let client = connect(matches)?;

    let id = i32_arg(delete_matches, "ID")?;
    ops::delete_dataset(&client, id).await?;

    println!("deleted dataset '{}'", id);
    Ok(())
}

#[tokio::main]
async fn download(matches: &ArgMatches, _: &ArgMatches,
        download_matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    // initialize grpc client
    let client = connect(matches)?;

    // retrieve first chunk
    let id = i32_arg(download_matches, "ID")?;
    let chunk = ops::download_dataset(&client, id).await?;
    log::info!("downloaded chunk [id={}, file_name={}, bytes={}]",
        id, chunk.file_name, chunk.content.len());

    // write chunk content
    match download_matches.get_one::<String>("output") {
        Some(path) => std::fs::write(path, &chunk.content)?,
        None => std::io::stdout().write_all(&chunk.content)?,
    }

    Ok(())
}

#[tokio::main]
async fn list(matches: &ArgMatches, _: &ArgMatches,
        _list_matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    // initialize grpc client
    let client: Arc<dyn DatasetService> = Arc::new(connect(matches)?);

    // refresh dataset store
    let store = DatasetStore::new(client);
    let receiver = store.subscribe();
    store.fetch_datasets().await;

    if !receiver.has_changed()? {
        return Err("failed to refresh dataset list".into());
    }

    // print information
    println!("{:<8}{:<40}{:<24}", "id", "name", "created_at");
    println!("------------------------------------------------------------------------");
    for dataset in store.datasets().iter() {
        println!("{:<8}{:<40}{:<24}", dataset.id,
            dataset.name, dataset.created_at);
    }

    Ok(())
}

#[tokio::main]
async fn summary(matches: &ArgMatches, _: &ArgMatches,
        summary_matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    // initialize grpc client
    let client = connect(matches)?;

    let reply = ops::get_dataset_summary(&client,
        i32_arg(summary_matches, "ID")?).await?;

    println!("{}", reply.summary_data);
    Ok(())
}

#[tokio::main]
async fn upload(matches: &ArgMatches, _: &ArgMatches,
        upload_matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    // initialize grpc client
    let client = connect(matches)?;

    let reply = ops::upload_csv_file(&client,
        string_arg(upload_matches, "FILE")?).await?;

    println!("{} [id={}]", reply.message, reply.id);
    Ok(())
}
