//! Terminal form: the presentation layer in front of [`FirePredictor`].
//!
//! Enforces the input ranges, builds a [`FireObservation`] and renders the
//! prediction. Each round starts from the previous round's answers.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use prediction::{
    FireLabel, FireObservation, FirePredictor, Month, NumericField, Prediction, Weekday,
};
use tracing::{debug, warn};

const TITLE: &str = "Forest Fire Occurrence Prediction";
const INSTRUCTIONS: &str = "Adjust the inputs to predict whether a forest fire is likely \
    to occur. Press enter to keep the value shown.";

pub struct FormSession<R, W> {
    predictor: FirePredictor,
    input: R,
    output: W,
    probability_decimals: usize,
    repeat: bool,
}

impl<R: BufRead, W: Write> FormSession<R, W> {
    pub fn new(
        predictor: FirePredictor,
        input: R,
        output: W,
        probability_decimals: usize,
        repeat: bool,
    ) -> Self {
        Self {
            predictor,
            input,
            output,
            probability_decimals,
            repeat,
        }
    }

    /// Run rounds until the user stops or input ends. Returns how many
    /// predictions were rendered.
    pub fn run(&mut self) -> io::Result<usize> {
        writeln!(self.output, "{TITLE}")?;
        writeln!(self.output, "{INSTRUCTIONS}")?;

        let mut current = FireObservation::default();
        let mut rendered = 0usize;
        loop {
            writeln!(self.output)?;
            let Some(observation) = self.collect(&current)? else {
                break;
            };

            match self.predictor.predict_observation(&observation) {
                Ok(prediction) => {
                    let line = render_prediction(&prediction, self.probability_decimals);
                    writeln!(self.output, "{line}")?;
                    rendered += 1;
                }
                Err(err) => {
                    warn!(error = %err, "prediction failed");
                    writeln!(self.output, "Prediction failed: {err}")?;
                }
            }
            current = observation;

            if !self.repeat || !self.ask_again()? {
                break;
            }
        }
        self.output.flush()?;
        Ok(rendered)
    }

    /// `None` when input ends before every field is answered.
    fn collect(&mut self, current: &FireObservation) -> io::Result<Option<FireObservation>> {
        let mut observation = current.clone();

        let Some(month) = self.ask_choice("Month", &Month::ALL, current.month)? else {
            return Ok(None);
        };
        let Some(day) = self.ask_choice("Day", &Weekday::ALL, current.day)? else {
            return Ok(None);
        };
        observation.month = month;
        observation.day = day;

        for field in NumericField::ALL {
            let Some(value) = self.ask_numeric(field, current.value(field))? else {
                return Ok(None);
            };
            observation.set_value(field, value);
        }
        debug!(?observation, "form completed");
        Ok(Some(observation))
    }

    fn ask_choice<T>(&mut self, label: &str, options: &[T], current: T) -> io::Result<Option<T>>
    where
        T: Copy + Display + FromStr,
        T::Err: Display,
    {
        let listing = options
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("/");
        loop {
            write!(self.output, "{label} [{listing}] ({current}): ")?;
            self.output.flush()?;
            let Some(answer) = self.read_answer()? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(current));
            }
            match answer.parse::<T>() {
                Ok(choice) => return Ok(Some(choice)),
                Err(err) => writeln!(self.output, "  {err}; choose one of {listing}")?,
            }
        }
    }

    fn ask_numeric(&mut self, field: NumericField, current: f64) -> io::Result<Option<f64>> {
        let (min, max) = field.range();
        loop {
            write!(
                self.output,
                "{} [{}-{}] ({}): ",
                field.label(),
                format_value(field, min),
                format_value(field, max),
                format_value(field, current)
            )?;
            self.output.flush()?;
            let Some(answer) = self.read_answer()? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(current));
            }
            match parse_numeric(field, &answer) {
                Ok(value) => return Ok(Some(value)),
                Err(reason) => writeln!(self.output, "  {reason}")?,
            }
        }
    }

    fn ask_again(&mut self) -> io::Result<bool> {
        write!(self.output, "Predict again? [y/N]: ")?;
        self.output.flush()?;
        let answer = self.read_answer()?.unwrap_or_default();
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Validate one numeric answer against the field's range and integrality.
pub fn parse_numeric(field: NumericField, raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("{raw:?} is not a number"))?;
    if field.is_integer() && value.fract() != 0.0 {
        return Err(format!("{} takes whole numbers", field.label()));
    }
    if !field.contains(value) {
        let (min, max) = field.range();
        return Err(format!(
            "{} must be between {} and {}",
            field.label(),
            format_value(field, min),
            format_value(field, max)
        ));
    }
    Ok(value)
}

pub fn render_prediction(prediction: &Prediction, decimals: usize) -> String {
    let verdict = match prediction.label {
        FireLabel::Fire => "Fire likely to occur",
        FireLabel::NoFire => "Fire unlikely to occur",
    };
    format!(
        "{verdict} (Probability: {:.*})",
        decimals,
        prediction.label_probability()
    )
}

fn format_value(field: NumericField, value: f64) -> String {
    if field.is_integer() {
        format!("{value:.0}")
    } else if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
