use super::*;

const DEFAULT_MAX: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Progress track thickness.
pub enum ProgressSize {
    /// Standard track.
    #[default]
    Default,
    /// Thin track.
    Sm,
    /// Thick track.
    Lg,
}

impl VariantToken for ProgressSize {
    const AXIS: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Default, Self::Sm, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }
}

/// Progress track table.
pub const PROGRESS: VariantSpec = VariantSpec::new(
    "relative w-full overflow-hidden rounded-full bg-base-subtle",
    &[VariantAxis::new(
        "size",
        "default",
        &[("default", "h-4"), ("sm", "h-2"), ("lg", "h-6")],
    )],
);

/// Progress indicator table.
pub const PROGRESS_INDICATOR: VariantSpec = VariantSpec::new(
    "h-full w-full flex-1 bg-primary-solid transition-all",
    &[VariantAxis::new(
        "motion",
        "static",
        &[
            ("static", ""),
            ("indeterminate", "animate-progress-indeterminate"),
        ],
    )],
);

#[derive(Debug, Clone, Copy, PartialEq)]
/// Normalized progress reading.
pub struct ProgressReading {
    /// Value clamped into `0..=max`, `None` when unknown.
    pub value: Option<f64>,
    /// Effective maximum.
    pub max: f64,
}

impl ProgressReading {
    /// Normalizes a raw value and maximum.
    ///
    /// A non-finite or non-positive `max` becomes 100. Values are clamped into `0..=max`, so
    /// infinities land on a bound; `NaN` counts as unknown.
    pub fn new(value: Option<f64>, max: f64) -> Self {
        let max = if max.is_finite() && max > 0.0 {
            max
        } else {
            DEFAULT_MAX
        };
        let value = value
            .filter(|value| !value.is_nan())
            .map(|value| value.clamp(0.0, max));
        Self { value, max }
    }

    /// Filled share in percent. Unknown values read as zero.
    pub fn percent(&self) -> f64 {
        let percent = self.value.unwrap_or(0.0) / self.max * 100.0;
        (percent * 10_000.0).round() / 10_000.0
    }

    /// `data-state` for the track and indicator.
    pub fn state(&self) -> &'static str {
        match self.value {
            None => "indeterminate",
            Some(value) if value >= self.max => "complete",
            Some(_) => "loading",
        }
    }

    /// CSS transform sliding the indicator into view.
    pub fn transform(&self) -> String {
        let hidden = ((100.0 - self.percent()) * 10_000.0).round() / 10_000.0;
        if hidden == 0.0 {
            "translateX(0%)".to_string()
        } else {
            format!("translateX(-{hidden}%)")
        }
    }
}

/// Class strings for the track and indicator.
pub fn progress_class(size: ProgressSize, indeterminate: bool, class: &str) -> (String, String) {
    let motion = if indeterminate {
        "indeterminate"
    } else {
        "static"
    };
    (
        render_class("Progress", &PROGRESS, &[size.selection()], class),
        render_class("Progress", &PROGRESS_INDICATOR, &[("motion", motion)], ""),
    )
}

#[component]
/// Horizontal progress track with a sliding indicator.
pub fn Progress(
    #[prop(optional, into)] value: MaybeSignal<Option<f64>>,
    #[prop(default = DEFAULT_MAX.into(), into)] max: MaybeSignal<f64>,
    #[prop(optional, into)] size: MaybeSignal<ProgressSize>,
    #[prop(optional, into)] indeterminate: MaybeSignal<bool>,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let reading = Signal::derive(move || ProgressReading::new(value.get(), max.get()));
    let classes = Signal::derive(move || progress_class(size.get(), indeterminate.get(), &class.get()));

    view! {
        <div
            node_ref=node_ref
            class=move || classes.get().0
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax=move || reading.get().max.to_string()
            aria-valuenow=move || reading.get().value.map(|value| value.to_string())
            data-slot="progress"
            data-state=move || reading.get().state()
            data-value=move || reading.get().value.map(|value| value.to_string())
            data-max=move || reading.get().max.to_string()
            {..attributes}
        >
            <div
                class=move || classes.get().1
                style:transform=move || reading.get().transform()
                data-slot="progress-indicator"
                data-state=move || reading.get().state()
            ></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn transform(value: Option<f64>, max: f64) -> String {
        ProgressReading::new(value, max).transform()
    }

    #[test]
    fn indicator_slides_by_the_unfilled_share() {
        assert_eq!(transform(Some(75.0), 100.0), "translateX(-25%)");
        assert_eq!(transform(Some(0.0), 100.0), "translateX(-100%)");
        assert_eq!(transform(Some(100.0), 100.0), "translateX(0%)");
        assert_eq!(transform(None, 100.0), "translateX(-100%)");
        assert_eq!(transform(Some(1.0), 3.0), "translateX(-66.6667%)");
    }

    #[test]
    fn values_are_clamped_into_range() {
        assert_eq!(transform(Some(150.0), 100.0), "translateX(0%)");
        assert_eq!(transform(Some(-20.0), 100.0), "translateX(-100%)");
        assert_eq!(ProgressReading::new(Some(f64::INFINITY), 50.0).value, Some(50.0));
        assert_eq!(ProgressReading::new(Some(f64::NAN), 50.0).value, None);
    }

    #[test]
    fn invalid_max_falls_back_to_one_hundred() {
        assert_eq!(ProgressReading::new(Some(40.0), 0.0).max, 100.0);
        assert_eq!(ProgressReading::new(Some(40.0), -5.0).max, 100.0);
        assert_eq!(ProgressReading::new(Some(40.0), f64::NAN).max, 100.0);
        assert_eq!(transform(Some(50.0), 200.0), "translateX(-75%)");
    }

    #[test]
    fn state_tracks_completion() {
        assert_eq!(ProgressReading::new(None, 100.0).state(), "indeterminate");
        assert_eq!(ProgressReading::new(Some(10.0), 100.0).state(), "loading");
        assert_eq!(ProgressReading::new(Some(120.0), 100.0).state(), "complete");
    }

    #[test]
    fn indeterminate_flag_animates_the_indicator() {
        let (track, indicator) = progress_class(ProgressSize::Sm, true, "");
        assert_eq!(track, "relative w-full overflow-hidden rounded-full bg-base-subtle h-2");
        assert_eq!(
            indicator,
            "h-full w-full flex-1 bg-primary-solid transition-all animate-progress-indeterminate"
        );
        let (_, settled) = progress_class(ProgressSize::Sm, false, "");
        assert!(!settled.contains("animate-"));
    }
}
