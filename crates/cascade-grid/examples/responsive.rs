//! Cascade Grid Responsive Example
//!
//! Opens a window and drives a small grid tree from its resize events:
//! - A window-relative root grid
//! - A self-measured content panel, fed half the window width
//! - A parent-relative card list that follows the panel
//!
//! Resize the window and watch the resolved size classes and cell layouts
//! in the log. Set `RUST_LOG=cascade_grid=debug` for propagation detail.
//!
//! Run with: cargo run -p cascade-grid --example responsive

use std::sync::Arc;

use cascade_grid::{
    Block, CellSize, GridConfig, GridNode, InheritanceMode, Section, SizeClass, WindowMetrics,
    WindowSize,
};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

/// The grid tree and the cells rendered into it.
struct Layout {
    root: GridNode,
    panel: GridNode,
    cards: GridNode,
    sidebar: Block,
    content: Block,
    card: Block,
    section: Section,
}

impl Layout {
    fn new(window: Arc<WindowSize>) -> Result<Self, cascade_grid::GridError> {
        let root = GridNode::new(GridConfig::new().stretchable(true), None, window);
        let panel = root.child(GridConfig::new().relative_to(InheritanceMode::SelfMeasured));
        let cards = panel.child(GridConfig::new().relative_to(InheritanceMode::Parent));
        root.on_mount()?;
        panel.on_mount()?;
        cards.on_mount()?;

        Ok(Self {
            root,
            panel,
            cards,
            sidebar: Block::new()
                .hidden_at(SizeClass::Xs)
                .visible_at(SizeClass::Md)
                .size_at(SizeClass::Md, CellSize::Points(240.0))
                .size_at(SizeClass::Xl, CellSize::Points(320.0)),
            content: Block::new(),
            card: Block::new()
                .size(CellSize::Percent(100.0))
                .size_at(SizeClass::Sm, CellSize::Percent(50.0))
                .size_at(SizeClass::Lg, CellSize::Percent(25.0)),
            section: Section::new().stretch(true),
        })
    }

    /// Stand-in for a layout pass: the panel gets half the window.
    fn relayout(&self, width: f64, height: f64) {
        self.panel.on_measured(width / 2.0, height);

        let root_ctx = self.root.context();
        let cards_ctx = self.cards.context();
        tracing::info!(
            root = %root_ctx.size_class,
            panel = %self.panel.size_class(),
            cards = %cards_ctx.size_class,
            "layout pass"
        );
        tracing::info!(section = ?self.section.layout(&root_ctx), "section");
        tracing::info!(sidebar = ?self.sidebar.layout(&root_ctx), "sidebar");
        tracing::info!(content = ?self.content.layout(&root_ctx), "content");
        tracing::info!(card = ?self.card.layout(&cards_ctx), "card");
    }
}

/// Application state
#[derive(Default)]
struct App {
    window: Option<Arc<Window>>,
    window_size: Option<Arc<WindowSize>>,
    layout: Option<Layout>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes().with_title("Cascade Grid - Responsive");
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                tracing::error!(%err, "failed to create window");
                event_loop.exit();
                return;
            }
        };

        let window_size = Arc::new(WindowSize::from_window(&window));
        match Layout::new(window_size.clone()) {
            Ok(layout) => {
                let size = window_size.window_size();
                layout.relayout(size.width, size.height);
                self.layout = Some(layout);
            }
            Err(err) => {
                tracing::error!(%err, "failed to build grid");
                event_loop.exit();
                return;
            }
        }

        self.window_size = Some(window_size);
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::CloseRequested = event {
            event_loop.exit();
            return;
        }

        let (Some(window_size), Some(layout)) = (&self.window_size, &self.layout) else {
            return;
        };
        if window_size.handle_window_event(&event) {
            let size = window_size.window_size();
            layout.relayout(size.width, size.height);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let event_loop = EventLoop::new()?;
    let mut app = App::default();
    event_loop.run_app(&mut app)?;
    Ok(())
}
