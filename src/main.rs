//! Walkthrough of the Direct2D and DirectWrite bindings
//!
//! Prints the flattened slot map of every transcribed interface (or of the
//! one named on the command line) and the size of every value structure,
//! then drives Rust objects through their tables the way the native
//! runtimes do.
//!
//! ```text
//! cargo run                      # everything
//! cargo run -- IDWriteFontSet    # one slot map
//! ```

use std::cell::Cell;
use std::ffi::c_void;
use std::rc::Rc;

use comvtable::*;
use dxinterop::catalog;
use dxinterop::d2d1::*;
use dxinterop::dwrite::*;
use dxinterop::foundation::*;

// =============================================================================
// A Rust transform: an offset node that reports its changes
// =============================================================================

com_object! {
    struct Nudge: ID2D1OffsetTransform {
        offset: Cell<D2D1_POINT_2L>,
        moves: Cell<u32>,
    }
}

impl ID2D1TransformNodeImpl for Nudge {
    fn GetInputCount(&self) -> u32 {
        1
    }
}

impl ID2D1OffsetTransformImpl for Nudge {
    fn SetOffset(&self, offset: D2D1_POINT_2L) {
        log::debug!("offset moved to ({}, {})", offset.x, offset.y);
        self.offset.set(offset);
        self.moves.set(self.moves.get() + 1);
    }

    fn GetOffset(&self, result: *mut D2D1_POINT_2L) -> *mut D2D1_POINT_2L {
        unsafe { *result = self.offset.get() };
        result
    }
}

fn print_slots(desc: &InterfaceDescriptor) {
    println!("{} {{{}}}", desc.name, desc.iid);
    for (slot, name) in desc.slots.iter().enumerate() {
        println!("  [{slot:2}] {name}");
    }
}

fn main() {
    env_logger::init();

    if let Some(name) = std::env::args().nth(1) {
        match catalog::interface(&name) {
            Some(desc) => print_slots(&desc),
            None => {
                eprintln!("unknown interface: {name}");
                std::process::exit(1);
            }
        }
        return;
    }

    // =========================================================================
    // Slot maps
    // =========================================================================
    println!("=== Interface tables ===\n");
    for desc in catalog::interfaces() {
        print_slots(&desc);
        println!();
    }

    println!("=== Value structures ===");
    for layout in catalog::structures() {
        println!("  {:44} {:3} bytes, align {}", layout.name, layout.size, layout.align);
    }

    // =========================================================================
    // Rust object behind ID2D1OffsetTransform
    // =========================================================================
    println!("\n--- Offset transform ---");
    let transform = Nudge::create(Cell::new(D2D1_POINT_2L::default()), Cell::new(0));
    transform.set_offset(D2D1_POINT_2L { x: 4, y: -2 });
    let offset = transform.offset();
    println!("  offset read back through GetOffset: ({}, {})", offset.x, offset.y);

    match transform.cast::<ID2D1TransformNode>() {
        Ok(node) => println!("  as ID2D1TransformNode: {} input(s)", node.input_count()),
        Err(err) => println!("  QueryInterface(ID2D1TransformNode) failed: {err}"),
    }
    if let Err(err) = transform.cast::<ID2D1DrawTransform>() {
        println!("  as ID2D1DrawTransform: {err}");
    }

    let object = unsafe { Nudge::from_interface(transform.as_raw().cast::<c_void>()) };
    println!(
        "  moves: {}, references: {}",
        object.moves.get(),
        object.ref_count()
    );

    // =========================================================================
    // Font download listener
    // =========================================================================
    println!("\n--- Font download listener ---");
    let completed = Rc::new(Cell::new(None));
    let sink = completed.clone();
    let listener = FontDownloadListener::new(move |_context, status| sink.set(Some(status)));

    // what the download queue does when a remote font fails to arrive
    unsafe {
        listener.DownloadCompleted(
            std::ptr::null_mut(),
            std::ptr::null_mut(),
            DWRITE_E_DOWNLOADFAILED,
        );
    }
    match completed.get() {
        Some(status) => println!(
            "  listener saw {}",
            ComError::Native { code: status }
        ),
        None => println!("  listener was not called"),
    }

    // =========================================================================
    // Property values
    // =========================================================================
    println!("\n--- Font properties ---");
    let family = wide::to_wide("Segoe UI");
    let locale = wide::to_wide("en-us");
    let property = DWRITE_FONT_PROPERTY::new(
        DWRITE_FONT_PROPERTY_ID_WIN32_FAMILY_NAME,
        &family,
        Some(&locale),
    );
    println!("  {:?} = {:?}", property.property_id, "Segoe UI");
    println!(
        "  weight {:?}, stretch {:?}, style {:?}",
        DWRITE_FONT_WEIGHT(600),
        DWRITE_FONT_STRETCH_NORMAL,
        DWRITE_FONT_STYLE_ITALIC
    );
    println!("  bold simulation on: {:?}", DWRITE_FONT_SIMULATIONS::BOLD);
    println!("  truthy BOOL: {}", from_bool(TRUE));
}
