//! `traitsdata [settings-file]`
//!
//! Declares a small media package, prints its catalog as JSON, then lets
//! a producer and a consumer exchange metadata through one shared store.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use traitsdata::schema::Catalog;
use traitsdata::settings::Settings;
use traitsdata::{
    define_specification, define_trait, define_unversioned_trait, Result, SpecificationView,
    TraitView, TraitsData,
};

define_trait! {
    /// Where the content for an entity can be found.
    pub struct LocatableContentTraitV1 {
        id: "acme-media:content.LocatableContent",
        name: "LocatableContent",
        version: 1,
        description: "Where the content for an entity can be found.",
        usage: ["entity", "locale"],
        deprecated: false,
        properties: {
            "location": String, "A URL pointing to the content." => get_location / get_location_or / set_location;
            "mimeType": String, "The MIME type of the content." => get_mime_type / get_mime_type_or / set_mime_type;
        }
    }
}

define_trait! {
    /// The pixel dimensions of an image, version 1.
    pub struct RasterTraitV1 {
        id: "acme-media:image.Raster",
        name: "Raster",
        version: 1,
        description: "The pixel dimensions of an image, version 1.",
        usage: ["entity"],
        deprecated: false,
        properties: {
            "width": i64, "Width in pixels." => get_width / get_width_or / set_width;
            "height": i64, "Height in pixels." => get_height / get_height_or / set_height;
        }
    }
}

define_trait! {
    /// The pixel dimensions of an image, version 2.
    pub struct RasterTraitV2 {
        id: "acme-media:image.Raster.v2",
        name: "Raster",
        version: 2,
        description: "The pixel dimensions of an image, version 2.",
        usage: ["entity"],
        deprecated: false,
        properties: {
            "width": i64, "Width in pixels." => get_width / get_width_or / set_width;
            "height": i64, "Height in pixels." => get_height / get_height_or / set_height;
            "pixelAspectRatio": f64, "Width of a pixel over its height." => get_pixel_aspect_ratio / get_pixel_aspect_ratio_or / set_pixel_aspect_ratio;
        }
    }
}

define_unversioned_trait! {
    /// The pixel dimensions of an image, version 1.
    pub struct RasterTrait => RasterTraitV1;
}

define_trait! {
    /// Marks an entity as a proxy of its full resolution counterpart.
    pub struct ProxyTraitV1 {
        id: "acme-media:image.Proxy",
        name: "Proxy",
        version: 1,
        description: "Marks an entity as a proxy of its full resolution counterpart.",
        usage: ["entity"],
        deprecated: false,
        properties: {
            "isProxy": bool, "Whether the entity is a proxy." => get_is_proxy / get_is_proxy_or / set_is_proxy;
        }
    }
}

define_specification! {
    /// A raster image file.
    pub struct ImageFileSpecificationV1 {
        id: "acme-media:image.ImageFile",
        name: "ImageFile",
        version: 1,
        description: "A raster image file.",
        usage: ["entity"],
        deprecated: false,
        traits: {
            locatable_content_trait: LocatableContentTraitV1,
            raster_trait: RasterTraitV2,
        }
    }
}

fn catalog() -> Result<Catalog> {
    let mut catalog = Catalog::new("acme-media", "Traits and specifications for media files.");
    catalog.register_trait::<LocatableContentTraitV1>()?;
    catalog.register_trait::<RasterTraitV1>()?;
    catalog.register_trait::<RasterTraitV2>()?;
    catalog.register_trait::<ProxyTraitV1>()?;
    catalog.register_specification::<ImageFileSpecificationV1>()?;
    Ok(catalog)
}

fn exchange() -> Result<()> {
    // producer
    let image = ImageFileSpecificationV1::create();
    image.locatable_content_trait().set_location("file:///shots/010/plate.0001.exr");
    image.locatable_content_trait().set_mime_type("image/x-exr");
    image.raster_trait().set_width(4096);
    image.raster_trait().set_height(2160);
    image.raster_trait().set_pixel_aspect_ratio(1.0);

    // an unrelated component attaches its own trait to the same store
    let data = Arc::clone(image.traits_data());
    ProxyTraitV1::new(Arc::clone(&data)).set_is_proxy(false);
    info!(store = %data, "produced");

    // consumer, working on a copy
    let received = TraitsData::make_copy(&data);
    let raster = RasterTraitV2::new(Arc::clone(&received));
    if !raster.is_imbued() {
        info!("no raster information");
        return Ok(());
    }
    let location = LocatableContentTraitV1::new(Arc::clone(&received))
        .get_location_or(String::from("<unknown>"));
    let width = raster.get_width()?.unwrap_or_default();
    let height = raster.get_height()?.unwrap_or_default();
    let aspect = raster.get_pixel_aspect_ratio_or(1.0);
    let proxy = ProxyTraitV1::new(Arc::clone(&received)).get_is_proxy_or(true);
    info!(%location, width, height, aspect, proxy, "consumed");

    // version 1 of the raster trait was never imbued by the producer
    #[allow(deprecated)]
    let legacy = RasterTrait::new(received);
    info!(imbued = legacy.is_imbued(), "legacy raster view");
    println!("{}", data);
    Ok(())
}

fn run(settings: &Settings) -> Result<()> {
    let catalog = catalog()?;
    println!("{}", catalog.to_json(settings.pretty)?);
    exchange()
}

fn main() -> ExitCode {
    let path = std::env::args().nth(1);
    let settings = match Settings::load(path.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .try_init();
    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "traitsdata failed");
            ExitCode::FAILURE
        }
    }
}
