use minijinja::{Environment, Value, context};

use crate::{error::Error, model::BookingData};

const BOOKING_TEMPLATE: &str = "booking.html";
const NOT_FOUND_TEMPLATE: &str = "not_found.html";

/// Compiled page templates. `.html` templates are auto-escaped.
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(BOOKING_TEMPLATE, include_str!("../templates/booking.html"))?;
        env.add_template(
            NOT_FOUND_TEMPLATE,
            include_str!("../templates/not_found.html"),
        )?;

        Ok(Self { env })
    }

    /// Renders the booking as pretty-printed JSON under a heading, followed by
    /// `outlet`, which holds already rendered child markup.
    #[tracing::instrument(name = "render booking page", skip_all, fields(booking_id = %data.booking.id))]
    pub fn render_booking_page(&self, data: &BookingData, outlet: &str) -> Result<String, Error> {
        let data = serde_json::to_string_pretty(data).map_err(|e| Error::Other(e.into()))?;

        self.env
            .get_template(BOOKING_TEMPLATE)
            .and_then(|template| {
                template.render(context! {
                    data => data,
                    outlet => Value::from_safe_string(outlet.to_string()),
                })
            })
            .map_err(Error::Render)
    }

    pub fn render_not_found(&self, booking_id: &str) -> Result<String, Error> {
        self.env
            .get_template(NOT_FOUND_TEMPLATE)
            .and_then(|template| template.render(context! { booking_id => booking_id }))
            .map_err(Error::Render)
    }
}
