//! Plain-text rendering of engine results.

use chrono::FixedOffset;
use saat_base::{ElementAlignment, Guidance, Language, element_name, planet_name};
use saat_search::{DayHours, DayOutlook, HourAccuracy, HourSnapshot, PlanetaryHour, TimeWindow};

fn clock(hour: &PlanetaryHour, offset: &FixedOffset) -> (String, String) {
    (
        hour.start.with_timezone(offset).format("%H:%M").to_string(),
        hour.end.with_timezone(offset).format("%H:%M").to_string(),
    )
}

fn accuracy_note(accuracy: &HourAccuracy) -> String {
    match accuracy {
        HourAccuracy::Astronomical => "astronomical".to_string(),
        HourAccuracy::Fallback(reason) => format!("approximate ({reason:?})"),
    }
}

pub fn hour_line(hour: &PlanetaryHour, offset: &FixedOffset, lang: Language) -> String {
    let (start, end) = clock(hour, offset);
    format!(
        "{marker}{idx:>2}  {start}-{end}  {planet:<10} {element:<8} {half}",
        marker = if hour.is_current { '>' } else { ' ' },
        idx = hour.index + 1,
        planet = planet_name(hour.planet, lang),
        element = element_name(hour.element(), lang),
        half = if hour.is_day_hour { "day" } else { "night" },
    )
}

pub fn day(day: &DayHours, offset: &FixedOffset, lang: Language) -> String {
    let mut out = format!(
        "Planetary hours for {} ({}), {}\n",
        day.date,
        day.weekday(),
        accuracy_note(&day.accuracy)
    );
    for hour in day.hours() {
        out.push_str(&hour_line(hour, offset, lang));
        out.push('\n');
    }
    out
}

pub fn alignment(a: &ElementAlignment, lang: Language) -> String {
    format!(
        "{} / {}: {} (harmony {})",
        element_name(a.user_element, lang),
        element_name(a.hour_element, lang),
        a.quality.name(),
        a.harmony_score
    )
}

pub fn guidance(g: &Guidance) -> String {
    let mut out = format!("{}\n", g.headline);
    for action in g.actions {
        out.push_str(&format!("  - {action}\n"));
    }
    out
}

pub fn window(w: &TimeWindow, offset: &FixedOffset, lang: Language) -> String {
    let mut out = format!("Closes in {} ({:?} urgency)\n", w.closes_in, w.urgency);
    match (&w.next_optimal_window, &w.next_window_in) {
        (Some(next), Some(wait)) => {
            let (start, end) = clock(next, offset);
            out.push_str(&format!(
                "Next matching hour: {} {start}-{end}, in {wait}\n",
                planet_name(next.planet, lang)
            ));
        }
        _ => out.push_str("No matching hour found\n"),
    }
    out
}

pub fn outlook(o: &DayOutlook) -> String {
    let best: Vec<String> = o.best_hours.iter().map(|i| (i + 1).to_string()).collect();
    format!(
        "{} of {} hours below threshold, average harmony {:.1}{}\nBest hours: {}\n",
        o.low_harmony_hours,
        o.total_hours,
        o.average_harmony,
        if o.is_rest_day { ", rest day" } else { "" },
        best.join(", ")
    )
}

pub fn snapshot(s: &HourSnapshot, offset: &FixedOffset, lang: Language) -> String {
    let mut out = format!(
        "{} [{}]\n",
        s.at.with_timezone(offset).format("%Y-%m-%d %H:%M"),
        accuracy_note(&s.accuracy)
    );
    if let Some(hour) = &s.current {
        out.push_str(&hour_line(hour, offset, lang));
        out.push('\n');
    }
    if let Some(a) = &s.alignment {
        out.push_str(&alignment(a, lang));
        out.push('\n');
    }
    if let Some(w) = &s.window {
        out.push_str(&window(w, offset, lang));
    }
    if let Some(g) = &s.guidance {
        out.push_str(&guidance(g));
    }
    out
}
