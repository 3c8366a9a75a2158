//! tricalc window

use egui::{Context, Key};
use tricalc::display::format_number;
use tricalc::quadratic::solve_quadratic_text;
use tricalc::units::convert_text;
use tricalc::{CalcError, Event as CalcEvent, Operator, Session, UnaryFunction, UnitCategory};
use tricore::theme::{consume_special_keys, menu_bar};
use tricore::{CalcTheme, ThemeKind};

use crate::settings::CalcSettings;

/// Shown in result fields when a text field doesn't hold a number.
const INPUT_ERROR: &str = "Input error";

#[derive(PartialEq, Clone, Copy)]
enum Tab {
    Calculator,
    Converter,
    Quadratic,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Calculator, Tab::Converter, Tab::Quadratic];

    fn title(self) -> &'static str {
        match self {
            Tab::Calculator => "calculator",
            Tab::Converter => "converter",
            Tab::Quadratic => "quadratic",
        }
    }
}

const SCIENTIFIC_ROWS: &[&[UnaryFunction]] = &[
    &[UnaryFunction::Sin, UnaryFunction::Cos, UnaryFunction::Tan, UnaryFunction::Ctg],
    &[UnaryFunction::Asin, UnaryFunction::Acos, UnaryFunction::Atan, UnaryFunction::Actan],
    &[UnaryFunction::Sqrt, UnaryFunction::Pi],
];

const KEYPAD_ROWS: &[&[(&str, CalcEvent)]] = &[
    &[
        ("7", CalcEvent::Digit('7')),
        ("8", CalcEvent::Digit('8')),
        ("9", CalcEvent::Digit('9')),
        ("÷", CalcEvent::Operator(Operator::Div)),
    ],
    &[
        ("4", CalcEvent::Digit('4')),
        ("5", CalcEvent::Digit('5')),
        ("6", CalcEvent::Digit('6')),
        ("×", CalcEvent::Operator(Operator::Mul)),
    ],
    &[
        ("1", CalcEvent::Digit('1')),
        ("2", CalcEvent::Digit('2')),
        ("3", CalcEvent::Digit('3')),
        ("-", CalcEvent::Operator(Operator::Sub)),
    ],
    &[
        ("0", CalcEvent::Digit('0')),
        (".", CalcEvent::Point),
        ("=", CalcEvent::Equals),
        ("+", CalcEvent::Operator(Operator::Add)),
    ],
    &[
        ("⌫", CalcEvent::Backspace),
        ("CE", CalcEvent::ClearEntry),
        ("C", CalcEvent::ClearAll),
    ],
];

/// Map a raw keyboard event to a keypad event.
fn key_event(event: &egui::Event) -> Option<CalcEvent> {
    match event {
        egui::Event::Text(text) => {
            let mut chars = text.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            match c {
                '0'..='9' => Some(CalcEvent::Digit(c)),
                '.' | ',' => Some(CalcEvent::Point),
                '=' => Some(CalcEvent::Equals),
                other => other.to_string().parse().ok().map(CalcEvent::Operator),
            }
        }
        egui::Event::Key { key, pressed: true, .. } => match key {
            Key::Enter => Some(CalcEvent::Equals),
            Key::Backspace => Some(CalcEvent::Backspace),
            Key::Delete => Some(CalcEvent::ClearEntry),
            Key::Escape => Some(CalcEvent::ClearAll),
            _ => None,
        },
        _ => None,
    }
}

fn button(ui: &mut egui::Ui, label: &str, width: f32, height: f32) -> bool {
    ui.add_sized([width, height], egui::Button::new(label)).clicked()
}

pub struct TriCalcApp {
    tab: Tab,
    theme: CalcTheme,
    session: Session,
    category: UnitCategory,
    from_unit: String,
    to_unit: String,
    converter_input: String,
    converter_result: String,
    coeff_a: String,
    coeff_b: String,
    coeff_c: String,
    quadratic_result: String,
    show_about: bool,
}

impl TriCalcApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &CalcSettings) -> Self {
        let theme = CalcTheme::new(settings.theme);
        theme.apply(&cc.egui_ctx);

        let mut app = Self {
            tab: Tab::Calculator,
            theme,
            session: Session::with_display_limit(settings.display_max_len),
            category: UnitCategory::Length,
            from_unit: String::new(),
            to_unit: String::new(),
            converter_input: "0".to_string(),
            converter_result: String::new(),
            coeff_a: "0".to_string(),
            coeff_b: "0".to_string(),
            coeff_c: "0".to_string(),
            quadratic_result: String::new(),
            show_about: false,
        };
        app.reset_units();
        app
    }

    fn set_theme(&mut self, ctx: &Context, kind: ThemeKind) {
        tracing::debug!(theme = %kind, "switching theme");
        self.theme = CalcTheme::new(kind);
        self.theme.apply(ctx);
    }

    /// Point both unit pickers at the first unit of the current category.
    fn reset_units(&mut self) {
        let units = self.category.units();
        let first = units.first().copied().unwrap_or_default();
        self.from_unit = first.to_string();
        self.to_unit = first.to_string();
        self.converter_result.clear();
    }

    fn convert(&mut self) {
        self.converter_result = match convert_text(
            self.category.name(),
            &self.from_unit,
            &self.to_unit,
            &self.converter_input,
        ) {
            Ok(value) => format_number(value),
            Err(CalcError::InvalidNumericInput(_)) => INPUT_ERROR.to_string(),
            Err(e) => e.to_string(),
        };
    }

    fn solve(&mut self) {
        self.quadratic_result = match solve_quadratic_text(&self.coeff_a, &self.coeff_b, &self.coeff_c) {
            Ok(roots) => roots.to_string(),
            Err(_) => INPUT_ERROR.to_string(),
        };
    }

    fn handle_keys(&mut self, ctx: &Context) {
        consume_special_keys(ctx);
        if self.tab != Tab::Calculator {
            return;
        }
        let events: Vec<CalcEvent> = ctx.input(|i| i.events.iter().filter_map(key_event).collect());
        for event in events {
            self.session.handle(event);
        }
    }

    fn render_display(&self, ui: &mut egui::Ui, text: &str) {
        self.theme.display_frame().show(ui, |ui| {
            ui.set_min_height(44.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(text)
                        .font(egui::FontId::proportional(self.theme.font_size_display))
                        .strong(),
                );
            });
        });
    }

    fn render_calculator(&mut self, ui: &mut egui::Ui) {
        self.render_display(ui, self.session.display());
        ui.add_space(8.0);

        let btn_w = (ui.available_width() - 12.0) / 4.0;
        let mut pressed = None;

        for row in SCIENTIFIC_ROWS {
            ui.horizontal(|ui| {
                for func in row.iter() {
                    if button(ui, func.label(), btn_w, 28.0) {
                        pressed = Some(CalcEvent::Unary(*func));
                    }
                }
            });
        }

        ui.separator();

        for row in KEYPAD_ROWS {
            ui.horizontal(|ui| {
                for (label, event) in row.iter() {
                    if button(ui, label, btn_w, 36.0) {
                        pressed = Some(*event);
                    }
                }
            });
        }

        if let Some(event) = pressed {
            self.session.handle(event);
        }
    }

    fn render_converter(&mut self, ui: &mut egui::Ui) {
        let before = self.category;
        egui::Grid::new("converter").num_columns(2).spacing([8.0, 6.0]).show(ui, |ui| {
            ui.label("category");
            egui::ComboBox::from_id_source("category")
                .selected_text(self.category.name())
                .show_ui(ui, |ui| {
                    for category in UnitCategory::ALL {
                        ui.selectable_value(&mut self.category, category, category.name());
                    }
                });
            ui.end_row();

            let units = self.category.units();
            ui.label("from");
            unit_picker(ui, "from_unit", &mut self.from_unit, &units);
            ui.end_row();

            ui.label("to");
            unit_picker(ui, "to_unit", &mut self.to_unit, &units);
            ui.end_row();

            ui.label("value");
            ui.add(egui::TextEdit::singleline(&mut self.converter_input).desired_width(140.0));
            ui.end_row();
        });
        if self.category != before {
            self.reset_units();
        }

        ui.add_space(8.0);
        if ui.button("convert").clicked() {
            self.convert();
        }
        ui.add_space(8.0);
        self.render_display(ui, &self.converter_result);
    }

    fn render_quadratic(&mut self, ui: &mut egui::Ui) {
        ui.label("a·x² + b·x + c = 0");
        ui.add_space(4.0);
        egui::Grid::new("quadratic").num_columns(2).spacing([8.0, 6.0]).show(ui, |ui| {
            for (name, field) in [("a", &mut self.coeff_a), ("b", &mut self.coeff_b), ("c", &mut self.coeff_c)] {
                ui.label(name);
                ui.add(egui::TextEdit::singleline(field).desired_width(140.0));
                ui.end_row();
            }
        });

        ui.add_space(8.0);
        if ui.button("solve").clicked() {
            self.solve();
        }
        ui.add_space(8.0);
        self.theme.display_frame().show(ui, |ui| {
            ui.set_min_height(28.0);
            ui.label(self.quadratic_result.as_str());
        });
    }
}

fn unit_picker(ui: &mut egui::Ui, id: &str, current: &mut String, units: &[&'static str]) {
    egui::ComboBox::from_id_source(id)
        .selected_text(current.as_str())
        .show_ui(ui, |ui| {
            for unit in units {
                ui.selectable_value(current, unit.to_string(), *unit);
            }
        });
}

impl eframe::App for TriCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        let palette = self.theme.palette();
        let mut new_theme = None;
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, palette, |ui| {
                for tab in Tab::ALL {
                    if ui.selectable_label(self.tab == tab, tab.title()).clicked() {
                        self.tab = tab;
                    }
                }
                ui.separator();
                ui.menu_button("theme", |ui| {
                    for kind in ThemeKind::ALL {
                        if ui.selectable_label(self.theme.kind == kind, kind.name()).clicked() {
                            new_theme = Some(kind);
                            ui.close_menu();
                        }
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
        if let Some(kind) = new_theme {
            self.set_theme(ctx, kind);
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Calculator => self.render_calculator(ui),
            Tab::Converter => self.render_converter(ui),
            Tab::Quadratic => self.render_quadratic(ui),
        });

        if self.show_about {
            egui::Window::new("about tricalc")
                .collapsible(false)
                .resizable(false)
                .default_width(240.0)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("tricalc");
                        ui.label(concat!("version ", env!("CARGO_PKG_VERSION")));
                    });
                    ui.separator();
                    ui.label("keys: 0-9 . + - * / = Enter");
                    ui.label("Backspace, Delete (CE), Esc (C)");
                    ui.vertical_centered(|ui| {
                        if ui.button("ok").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
