use anyhow::Context;
use clap::{Parser, Subcommand};
use crsmap::{
    data::{
        catalog::CrsCatalog,
        loader::{source_for, CatalogSource, FileCatalogSource},
        wkt::{export_wkt, WKT_FLAVORS},
    },
    download::{save_download, DownloadSource},
    listing::{page::filter_and_paginate, query::PageState},
    AreaOfUse, MapView, SiteConfig,
};
use serde_json::json;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "crsmap")]
#[command(about = "Area-of-use rectangles and the CRS reference list", long_about = None)]
struct Args {
    /// JSON site configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Site root used for crslist.json and reference links
    #[arg(long, global = true)]
    home_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the map rectangle and fitted view for an area of use
    #[command(allow_negative_numbers = true)]
    Bounds {
        west: f64,
        south: f64,
        east: f64,
        north: f64,
        /// Rectangle colour (defaults to the configured one)
        #[arg(long)]
        color: Option<String>,
    },
    /// Show one page of the reference list
    List {
        /// 1-based page number
        #[arg(long)]
        page: Option<usize>,
        /// Free-text search; a leading number also matches codes
        #[arg(long)]
        search: Option<String>,
        /// Page query string such as "?page=2&search=utm"
        #[arg(long, conflicts_with_all = ["page", "search"])]
        query: Option<String>,
        /// Read this crslist.json instead of the one below the home dir
        #[arg(long)]
        list: Option<PathBuf>,
    },
    /// Build crslist.json from an exported record list
    Index {
        /// Exported records (JSON array)
        #[arg(long)]
        input: PathBuf,
        /// Site output directory
        #[arg(long, default_value = ".")]
        dest: PathBuf,
        /// Also write wkt1/ and wkt2/<AUTH>/<code>.txt files
        #[arg(long)]
        wkt: bool,
    },
    /// Save a data URI, URL or file as a download
    Download {
        filename: String,
        /// data: URI, http(s) URL or local path
        source: String,
        #[arg(long, default_value = ".")]
        dest: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut config =
        SiteConfig::load(args.config.as_deref()).context("failed to load site config")?;
    if let Some(home_dir) = args.home_dir {
        config.home_dir = home_dir;
    }

    match args.command {
        Command::Bounds {
            west,
            south,
            east,
            north,
            color,
        } => {
            if let Some(color) = color {
                config.rectangle_color = color;
            }
            print_bounds(&AreaOfUse::new(west, south, east, north), &config)
        }
        Command::List {
            page,
            search,
            query,
            list,
        } => {
            let state = match query {
                Some(query) => PageState::from_query(&query),
                None => PageState::new(page.unwrap_or(1), search.unwrap_or_default()),
            };
            print_list(&config, &state, list).await
        }
        Command::Index { input, dest, wkt } => build_index(&config, &input, &dest, wkt),
        Command::Download {
            filename,
            source,
            dest,
        } => {
            let path = save_download(&filename, &DownloadSource::parse(&source), &dest)
                .await
                .with_context(|| format!("failed to save {}", filename))?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn print_bounds(area: &AreaOfUse, config: &SiteConfig) -> anyhow::Result<()> {
    let map = MapView::for_area(area, config);
    let rectangle = map.rectangle().context("map has no rectangle")?;

    let out = json!({
        "bounds": rectangle.corners(),
        "color": rectangle.style.color,
        "center": [map.center.lat, map.center.lng],
        "zoom": map.zoom,
        "tiles": map
            .visible_tiles()
            .into_iter()
            .map(|t| map.tile_layer().tile_url(t))
            .collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

async fn print_list(
    config: &SiteConfig,
    state: &PageState,
    list: Option<PathBuf>,
) -> anyhow::Result<()> {
    let source: Box<dyn CatalogSource + Send + Sync> = match list {
        Some(path) => Box::new(FileCatalogSource::new(path)),
        None => source_for(config),
    };
    let catalog = source
        .fetch()
        .await
        .with_context(|| format!("failed to load CRS list from {}", source.location()))?;

    let view = filter_and_paginate(catalog.records(), &state.search, state.page);
    println!(
        "page {} of {} ({} matching records)",
        view.state.page, view.max_pages, view.total
    );

    let entries = view.entries(&config.home_dir);
    let (left, right) = entries.split_at(view.left.len());
    for (column, entries) in [("left", left), ("right", right)] {
        if entries.is_empty() {
            continue;
        }
        println!("-- {} --", column);
        for entry in entries {
            println!("{}  {}", entry.label, entry.href);
        }
    }

    if let Some(previous) = &view.links.previous {
        println!("previous: {}", previous.href);
    }
    if let Some(next) = &view.links.next {
        println!("next: {}", next.href);
    }
    Ok(())
}

fn build_index(config: &SiteConfig, input: &Path, dest: &Path, wkt: bool) -> anyhow::Result<()> {
    let exported = CrsCatalog::from_file(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let report = CrsCatalog::build_index(exported.into_records());
    println!("Analysis of duplicated codes");
    for id in &report.duplicates {
        println!("{} is duplicated", id);
    }

    let path = report.catalog.write_index(dest, &config.list_file)?;
    println!(
        "{} records written to {} ({} without area of use skipped)",
        report.catalog.len(),
        path.display(),
        report.skipped
    );

    if wkt {
        for flavor in WKT_FLAVORS {
            let written = export_wkt(report.catalog.records(), flavor, dest)?;
            println!("{} {} files written", written.len(), flavor.version);
        }
    }
    Ok(())
}
