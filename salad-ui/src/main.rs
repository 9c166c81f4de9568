use eframe::{egui, Frame};
use egui::Context;

use salad_core::error::FormError;
use salad_core::form::FormInput;
use salad_core::generator::{generate, GenerationResult};
use salad_core::request::{Mode, DEFAULT_CEILING};

/// Shell-owned settings and wording.
///
/// The core only reports *what* happened; every user-facing string lives here.
struct ShellConfig {
    ceiling: u32,
    placeholder: String,
    /// `{max}` is replaced by the ceiling.
    limit_notice: String,
    empty_bank_notice: String,
    window_size: [f32; 2],
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            ceiling: DEFAULT_CEILING,
            placeholder: "Fill the bank and click Generate".to_owned(),
            limit_notice: "Sorry, you can generate at most {max} at a time.".to_owned(),
            empty_bank_notice: "No words available: add some words to the bank.".to_owned(),
            window_size: [480.0, 520.0],
        }
    }
}

/// Last submission outcome. Replaced on every click, never accumulated.
#[derive(Debug)]
enum Outcome {
    Generated(GenerationResult),
    Invalid(FormError),
}

/// Global UI state (MUST persist between frames in egui).
struct SaladUI {
    config: ShellConfig,
    form: FormInput,
    last_outcome: Option<Outcome>,
}

impl SaladUI {
    /// Initializes the UI with default form values.
    fn new(config: ShellConfig) -> Self {
        Self {
            config,
            form: FormInput::default(),
            last_outcome: None,
        }
    }

    /// Parses the form and generates a new salad.
    fn submit(&mut self) {
        let outcome = match self.form.submit(self.config.ceiling) {
            Ok(submission) => Outcome::Generated(generate(&submission.bank, &submission.request)),
            Err(e) => {
                log::debug!("Rejected submission: {e}");
                Outcome::Invalid(e)
            }
        };
        self.last_outcome = Some(outcome);
    }

    /// Text shown in the output area.
    fn output_text(&self) -> String {
        match &self.last_outcome {
            None => self.config.placeholder.clone(),
            Some(Outcome::Generated(GenerationResult::Salad(text))) => text.clone(),
            Some(Outcome::Generated(GenerationResult::LimitExceeded { ceiling })) => {
                self.config.limit_notice.replace("{max}", &ceiling.to_string())
            }
            Some(Outcome::Generated(GenerationResult::EmptyBank)) => {
                self.config.empty_bank_notice.clone()
            }
            Some(Outcome::Invalid(e)) => format!("Error: {e}"),
        }
    }
}

impl eframe::App for SaladUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label("Word bank");
            ui.text_edit_multiline(&mut self.form.bank);

            // Recomputed every frame, the bank is small
            ui.label(format!("{} unique words", self.form.word_bank().len()));

            egui::Grid::new("salad_grid")
                .num_columns(2)
                .spacing([20.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.label("Separator");
                    ui.horizontal(|ui| {
                        ui.radio_value(&mut self.form.separator, ",".to_owned(), "Comma");
                        ui.radio_value(&mut self.form.separator, " ".to_owned(), "Space");
                    });
                    ui.end_row();

                    ui.label("Type");
                    egui::ComboBox::from_id_salt("mode")
                        .selected_text(self.form.mode.as_str())
                        .show_ui(ui, |ui| {
                            for mode in [Mode::Words, Mode::Sentences] {
                                ui.selectable_value(&mut self.form.mode, mode.as_str().to_owned(), mode.as_str());
                            }
                        });
                    ui.end_row();

                    ui.label(format!("Count (max {})", self.config.ceiling));
                    ui.text_edit_singleline(&mut self.form.count);
                    ui.end_row();

                    // Sentence bounds only matter in sentences mode
                    if Mode::from_external(&self.form.mode) == Mode::Sentences {
                        ui.label("Min words per sentence");
                        ui.text_edit_singleline(&mut self.form.min_words);
                        ui.end_row();

                        ui.label("Max words per sentence");
                        ui.text_edit_singleline(&mut self.form.max_words);
                        ui.end_row();
                    }

                    ui.separator();
                    ui.end_row();
                });

            if ui
                .add_sized([200.0, 40.0], egui::Button::new("Generate"))
                .clicked()
            {
                self.submit();
            }

            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.label(self.output_text());
            });
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let config = ShellConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "word-salad",
        options,
        Box::new(|_| Ok(Box::new(SaladUI::new(config)))),
    )
}
