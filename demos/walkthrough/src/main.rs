//! walkthrough: place a pitch, then walk it with a simulated GPS and mark
//! every waypoint.
//!
//! Usage: `walkthrough [config.json]`.  Without a config file the built-in
//! defaults are used (a 9v9 pitch in east London, rotated 25°, ±4 m GPS).
//! Writes `sites.json`, `marking_summaries.csv` and `marked_points.csv` to
//! the output directory.

mod walker;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::info;

use pm_core::{LocalOffset, Rotation, UnixMillis};
use pm_nav::{
    ChannelProvider, GpsNoise, LocationEvent, MarkOutcome, MarkingController, NavConfig,
};
use pm_pitch::{CornerRole, PitchSize};
use pm_store::{CsvSummaryWriter, JsonSiteStore, Site, SiteLocation, SummaryWriter};

use walker::Walker;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Simulated clock start and tick.
const START_MS: i64 = 1_700_000_000_000;
const TICK_MS:  i64 = 1_000;

/// Give up if a waypoint takes longer than this many fixes.
const MAX_TICKS_PER_WAYPOINT: usize = 2_000;

// ── Config ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    site_name:      String,
    address:        Option<String>,
    lat:            f64,
    lng:            f64,
    size:           PitchSize,
    rotation:       Rotation,
    seed:           u64,
    gps_accuracy_m: f64,
    walk_step_m:    f64,
    output_dir:     PathBuf,
    nav:            NavConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            site_name:      "Hackney Marshes".to_owned(),
            address:        Some("Homerton Rd, London E9".to_owned()),
            lat:            51.5560,
            lng:            -0.0270,
            size:           PitchSize::NineASide,
            rotation:       Rotation::new(25),
            seed:           42,
            gps_accuracy_m: 4.0,
            walk_step_m:    1.4,
            output_dir:     PathBuf::from("output/walkthrough"),
            nav:            NavConfig::default(),
        }
    }
}

fn load_config() -> Result<DemoConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
        }
        None => Ok(DemoConfig::default()),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    let config = load_config()?;
    let mut now = UnixMillis(START_MS);
    println!("=== walkthrough: pitch marker ===");
    println!(
        "Pitch: {}  |  Rotation: {}°  |  GPS ±{} m  |  Seed: {}",
        config.size, config.rotation.degrees(), config.gps_accuracy_m, config.seed
    );
    println!();

    // 1. Site with one pitch at the site location.
    std::fs::create_dir_all(&config.output_dir)?;
    let store = JsonSiteStore::new(config.output_dir.join("sites.json"));
    let location = SiteLocation { lat: config.lat, lng: config.lng, address: config.address.clone() };
    let mut site = Site::new(location, now);
    site.rename(&config.site_name, now)?;
    let index = site.add_pitch(config.size, None, now);

    // 2. Adjust the placement: rotate, then lock the bottom-left corner and
    //    nudge it 3 m east as if the user had walked to the real corner.
    let mut placement = site.pitch(index)?.placement();
    placement.set_rotation(config.rotation);
    placement.lock_corner(CornerRole::BottomLeft)?;
    let corner = placement.corners()?.get(CornerRole::BottomLeft);
    placement.track_corner(corner.from_offset(LocalOffset::new(3.0, 0.0)));
    placement.unlock_corner()?;
    site.save_placement(index, &placement, now)?;
    store.save(&mut site, now)?;
    println!("Saved site {:?} with {} pitch(es) to {}", site.name, site.pitches.len(), store.path().display());

    // 3. Start marking.
    let (provider, feed) = ChannelProvider::new();
    let mut controller = MarkingController::new(provider, config.nav.clone())?;
    controller.begin(&placement)?;
    let total = controller.session().map(|s| s.waypoints().len()).unwrap_or(0);
    println!("Marking {total} waypoints");
    println!();

    // 4. Walk: start 30 m south of the centre.
    let start = placement.center()?.from_offset(LocalOffset::new(0.0, -30.0));
    let mut walker = Walker::new(start, config.walk_step_m);
    let mut gps = GpsNoise::new(config.seed, config.gps_accuracy_m);
    let mut ticks = 0usize;

    loop {
        let Some(target) = controller.session().and_then(|s| s.current_waypoint()).cloned() else {
            break;
        };
        ticks += 1;
        if ticks > MAX_TICKS_PER_WAYPOINT * total {
            bail!("walker failed to reach {:?}", target.name);
        }
        now = UnixMillis(now.0 + TICK_MS);

        let heading = walker.step_towards(target.point());
        let mut fix = gps.observe(walker.position());
        if let Some(h) = heading {
            fix = fix.with_heading(h);
        }
        feed.push(LocationEvent::Fix(fix));
        controller.pump();

        if !controller.can_mark() {
            continue;
        }
        match controller.mark(now) {
            MarkOutcome::Advanced { marked, .. } | MarkOutcome::Completed { marked } => {
                println!("  ✓ {:>2}/{total}  {:<32} ±{:.1} m", marked + 1, target.name, fix.accuracy);
            }
            other => info!(?other, "mark not recorded"),
        }
        if let Some(g) = controller.guidance() {
            info!(next = %g.heading_line(), "{}", g.instruction());
        }
    }
    println!();

    // 5. Finish and write the summary.
    let summary = controller.finish(now)?;
    let mut writer = CsvSummaryWriter::new(&config.output_dir)?;
    writer.write_summary(&summary)?;
    writer.finish()?;

    println!("Marked {} points in {} fixes", summary.marked_points.len(), ticks);
    if let Some(avg) = summary.average_accuracy() {
        println!("Average accuracy: ±{avg:.2} m");
    }
    println!();
    println!("{:<34} {:>10}", "Waypoint", "Offset (m)");
    println!("{}", "-".repeat(45));
    for point in &summary.marked_points {
        println!("{:<34} {:>10.2}", point.waypoint.name, point.offset_m());
    }

    Ok(())
}
