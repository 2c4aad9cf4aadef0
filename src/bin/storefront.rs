//! Single-page storefront application.
//!
//! Wires the library's state cells to egui widgets: a header with the cart
//! readout and Clear button, a filters row (search text, category dropdown,
//! price dropdown), a scrollable product grid with per-product Add to Cart /
//! View Details buttons, and a centered detail window over a dimmed
//! click-to-close overlay. The update loop is the only reader/writer of all
//! state; the catalog fetch is the one asynchronous operation and is polled
//! here once per frame.

use anyhow::{Context, Result};
use egui::RichText;
use std::time::Duration;
use storefront::{
    CartCounter, CartStore, CatalogClient, CatalogFetch, FilterState, Inspector, PRICE_BRACKETS,
    Product, category_options, default_state_dir, filter_catalog,
};

const GRID_COLUMNS: usize = 3;
const CARD_WIDTH: f32 = 280.0;
const DESCRIPTION_PREVIEW_CHARS: usize = 80;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("E-Shop Demo")
            .with_inner_size([1080.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "storefront",
        options,
        Box::new(|cc| match StorefrontApp::new(cc) {
            Ok(app) => Ok(Box::new(app) as Box<dyn eframe::App>),
            Err(err) => Err(err.into()),
        }),
    )
    .map_err(|err| anyhow::anyhow!("event loop failed: {err}"))
}

struct StorefrontApp {
    // Keeps the fetch task's executor alive for the lifetime of the app.
    #[allow(dead_code)]
    runtime: tokio::runtime::Runtime,
    catalog: Vec<Product>,
    fetch: Option<CatalogFetch>,
    cart: CartCounter,
    filters: FilterState,
    inspector: Inspector,
}

impl StorefrontApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Result<Self> {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("starting tokio runtime")?;

        let mut cart = CartCounter::new(CartStore::new(&default_state_dir()?));
        // Adopt the saved count before any mutation can trigger a write.
        cart.load();

        let fetch = CatalogFetch::spawn(runtime.handle(), CatalogClient::new());

        Ok(Self {
            runtime,
            catalog: Vec::new(),
            fetch: Some(fetch),
            cart,
            filters: FilterState::default(),
            inspector: Inspector::default(),
        })
    }

    /// Consume the fetch outcome once it lands.
    ///
    /// Failure is diagnostic-only: the catalog keeps its prior value (empty on
    /// first load) and no error state is shown.
    fn poll_fetch(&mut self, ctx: &egui::Context) {
        let Some(fetch) = &self.fetch else { return };
        match fetch.take() {
            Some(Ok(products)) => {
                tracing::info!(count = products.len(), "catalog loaded");
                self.catalog = products;
                self.fetch = None;
            }
            Some(Err(err)) => {
                tracing::error!(error = %err, "catalog fetch failed");
                self.fetch = None;
            }
            None => ctx.request_repaint_after(Duration::from_millis(150)),
        }
    }

    fn header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🛍 E-Shop Demo");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Clear").clicked() {
                        if let Err(err) = self.cart.clear() {
                            tracing::warn!(error = %err, "persisting cart count failed");
                        }
                    }
                    ui.label(format!("🛒 Cart: {}", self.cart.count()));
                });
            });
        });
    }

    fn filters_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.filters.search)
                    .hint_text("Search by name...")
                    .desired_width(220.0),
            );

            egui::ComboBox::from_id_salt("category-filter")
                .selected_text(self.filters.category.clone())
                .show_ui(ui, |ui| {
                    for option in category_options(&self.catalog) {
                        ui.selectable_value(&mut self.filters.category, option.clone(), option);
                    }
                });

            egui::ComboBox::from_id_salt("price-filter")
                .selected_text(price_label(&self.filters.price))
                .show_ui(ui, |ui| {
                    for (value, label) in PRICE_BRACKETS {
                        ui.selectable_value(&mut self.filters.price, value.to_string(), *label);
                    }
                });
        });
    }

    fn product_grid(&mut self, ui: &mut egui::Ui) {
        let filtered: Vec<Product> = filter_catalog(&self.catalog, &self.filters)
            .into_iter()
            .cloned()
            .collect();

        if filtered.is_empty() {
            ui.label("No products found.");
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for row in filtered.chunks(GRID_COLUMNS) {
                    ui.horizontal_top(|ui| {
                        for product in row {
                            self.product_card(ui, product);
                        }
                    });
                    ui.add_space(6.0);
                }
            });
    }

    fn product_card(&mut self, ui: &mut egui::Ui, product: &Product) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                if !product.image.is_empty() {
                    ui.add(
                        egui::Image::new(product.image.as_str())
                            .fit_to_exact_size(egui::vec2(96.0, 96.0)),
                    );
                }
                ui.label(RichText::new(&product.title).strong());
                ui.label(RichText::new(&product.category).weak().italics());
                ui.label(RichText::new(format!("${:.2}", product.price)).strong());
                ui.label(description_preview(&product.description));
                ui.horizontal(|ui| {
                    if ui.button("Add to Cart").clicked() {
                        if let Err(err) = self.cart.add() {
                            tracing::warn!(error = %err, "persisting cart count failed");
                        }
                    }
                    if ui.button("View Details").clicked() {
                        self.inspector.view(product.clone());
                    }
                });
            });
        });
    }

    fn detail_modal(&mut self, ctx: &egui::Context) {
        let Some(product) = self.inspector.current().cloned() else {
            return;
        };
        let screen = ctx.screen_rect();

        // Dimmed overlay behind the detail window; a click here closes the
        // view. The window sits on a higher layer and consumes its own
        // clicks, so clicks inside the content never reach the overlay.
        let overlay = egui::Area::new(egui::Id::new("detail-overlay"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let response = ui.allocate_response(screen.size(), egui::Sense::click());
                ui.painter()
                    .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(110));
                response
            });
        if overlay.inner.clicked() {
            self.inspector.close();
            return;
        }

        let mut close = false;
        egui::Window::new("Product Details")
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .default_width(420.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                if !product.image.is_empty() {
                    ui.add(egui::Image::new(product.image.as_str()).max_height(160.0));
                }
                ui.label(RichText::new(&product.title).strong().size(16.0));
                ui.label(RichText::new(&product.category).weak().italics());
                ui.label(RichText::new(format!("${:.2}", product.price)).strong());
                ui.separator();
                ui.label(&product.description);
                ui.add_space(4.0);
                if ui.button("Close").clicked() {
                    close = true;
                }
            });
        if close {
            self.inspector.close();
        }
    }
}

impl eframe::App for StorefrontApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_fetch(ctx);
        self.header(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.filters_row(ui);
            ui.separator();
            self.product_grid(ui);
        });
        self.detail_modal(ctx);
    }
}

fn price_label(value: &str) -> &'static str {
    PRICE_BRACKETS
        .iter()
        .find(|(bracket, _)| *bracket == value)
        .map(|(_, label)| *label)
        .unwrap_or("All Prices")
}

fn description_preview(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        return description.to_string();
    }
    let preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    format!("{preview}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_labels_resolve_for_all_brackets() {
        assert_eq!(price_label("all"), "All Prices");
        assert_eq!(price_label("100-1000"), "$100+");
        assert_eq!(price_label("unknown"), "All Prices");
    }

    #[test]
    fn description_preview_truncates_long_text() {
        let long = "x".repeat(200);
        let preview = description_preview(&long);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), DESCRIPTION_PREVIEW_CHARS + 3);
        assert_eq!(description_preview("short"), "short");
    }
}
