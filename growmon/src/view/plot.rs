//! Time-series plot of buffered readings, drawn on an Iced canvas.

use iced::mouse;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Stroke};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

use growmon_common::{Reading, SensorField};

use crate::message::Message;

/// Vertical scale applied to every value, in pixels per unit.
///
/// Vertical position is `height - value * VALUE_SCALE`: the screen axis
/// grows downward, so larger values draw higher.
pub const VALUE_SCALE: f32 = 4.0;

/// Fixed height of the plot surface.
pub const PLOT_HEIGHT: f32 = 400.0;

/// Fixed line color for a tracked field.
pub fn series_color(field: SensorField) -> Color {
    match field {
        SensorField::WaterTemp => Color::from_rgb(1.0, 0.0, 0.0),
        SensorField::Dht0Humidity => Color::from_rgb(1.0, 1.0, 0.0),
        SensorField::Dht0Temp => Color::from_rgb(0.0, 1.0, 0.0),
        SensorField::Dht1Humidity => Color::from_rgb(0.0, 1.0, 1.0),
        SensorField::Dht1Temp => Color::from_rgb(0.0, 0.0, 1.0),
    }
}

/// State for the plot surface.
#[derive(Debug)]
pub struct PlotState {
    /// The buffer snapshot to draw, oldest first.
    samples: Vec<Option<Reading>>,
    /// Cache for the plot geometry.
    cache: Cache,
}

impl Default for PlotState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotState {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            cache: Cache::new(),
        }
    }

    /// Replace the snapshot and invalidate the cached geometry.
    pub fn set_data(&mut self, samples: Vec<Option<Reading>>) {
        self.samples = samples;
        self.cache.clear();
    }

    pub fn samples(&self) -> &[Option<Reading>] {
        &self.samples
    }
}

/// Canvas program that renders the buffered readings.
struct Plot<'a> {
    state: &'a PlotState,
}

impl canvas::Program<Message> for Plot<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.state.cache.draw(renderer, bounds.size(), |frame| {
            draw_plot(frame, bounds.size(), &self.state.samples);
        });

        vec![geometry]
    }
}

/// Clear the surface and draw one polyline per tracked field.
fn draw_plot(frame: &mut Frame, size: Size, samples: &[Option<Reading>]) {
    let background = canvas::Path::rectangle(Point::ORIGIN, size);
    frame.fill(&background, Color::WHITE);

    for field in SensorField::ALL {
        let points = polyline(samples, field, size);
        if points.len() < 2 {
            continue;
        }

        let mut builder = canvas::path::Builder::new();
        let mut first = true;
        for point in points {
            if first {
                builder.move_to(point);
                first = false;
            } else {
                builder.line_to(point);
            }
        }

        frame.stroke(
            &builder.build(),
            Stroke::default()
                .with_color(series_color(field))
                .with_width(1.0),
        );
    }
}

/// Compute the polyline for one field over the buffer snapshot.
///
/// Horizontal spacing divides the surface width evenly across `len - 1`
/// intervals, so each slot keeps its x position whether or not it holds a
/// value. Slots that are empty, or hold a reading without this field, yield
/// no point: the line connects only the present samples and breaks across
/// gaps instead of interpolating. Fewer than two slots draws nothing.
pub fn polyline(samples: &[Option<Reading>], field: SensorField, size: Size) -> Vec<Point> {
    if samples.len() < 2 {
        return Vec::new();
    }

    let spacing = size.width / (samples.len() - 1) as f32;

    samples
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| {
            let value = slot.as_ref()?.get(field)?;
            Some(Point::new(
                i as f32 * spacing,
                size.height - value as f32 * VALUE_SCALE,
            ))
        })
        .collect()
}

/// Create the plot element.
pub fn plot_view(state: &PlotState) -> Element<'_, Message> {
    Canvas::new(Plot { state })
        .width(Length::Fill)
        .height(Length::Fixed(PLOT_HEIGHT))
        .into()
}
