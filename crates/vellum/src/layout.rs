//! Chart layout: turning data series into positioned SVG elements.
//!
//! # Architecture
//!
//! - [`DiagramBuilder`]: Emits a complete diagram for one series and returns
//!   a [`Diagram`] handle
//! - [`add_plot`](fn@add_plot): Adds further series on the axes of an existing diagram
//! - [`legend`](fn@legend): Adds a color legend, one row per series
//! - [`label`](fn@label) / [`grid`](fn@grid): The value labels and background grid used by
//!   diagrams, usable on their own
//! - [`PlotFrame`]: The geometry a diagram records for later overlays
//!
//! # Diagram structure
//!
//! ```text
//! g#diagram            translate(origin)            width, height
//! ├── rect             background
//! ├── text#title
//! └── g#plot           translate(label band, title height)
//!     ├── g#y-labels / g#x-labels
//!     └── svg          viewport over the plot area
//!         └── g        translate(0, h) scale(1, -1)        y axis up
//!             ├── g    translate(margin) scale(shrink)
//!             │   ├── g#grid
//!             │   └── g#data   translate(shift) scale(scale)
//!             │       ├── defs   markers
//!             │       └── polyline ...
//!             └── rect frame
//! ```

mod diagram;
mod frame;
mod grid;
mod label;
mod legend;
mod plot;

pub use diagram::{COLUMN_MARKER_ID, Diagram, DiagramBuilder, MIDMARKER_ID};
pub use frame::{DATA_ID, DIAGRAM_ID, PLOT_ID, PlotFrame};
pub use grid::{HORIZONTAL_LINE_ID, VERTICAL_LINE_ID, grid};
pub use label::label;
pub use legend::{LEGEND_RECT_ID, legend};
pub use plot::add_plot;
