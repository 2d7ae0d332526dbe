//! Export orchestrator
//!
//! Drives either export pipeline end to end under the single-flight state:
//! acquire, run the stages, deliver the artifact, notify, release. Partial
//! artifacts are never delivered; a failed export leaves nothing behind and
//! must be re-triggered by the user.

use crate::{
    ArtifactSink, EditorSurface, ExportError, ExportState, Result, StatusNotifier, VisualSurface,
};
use export_model::build_elements;
use raster_engine::{slice_into_pages, PageGeometry};
use tokio::task;

/// Fixed file name of the word-processing artifact
pub const DOCX_FILE_NAME: &str = "document.docx";

/// Fixed file name of the paginated raster artifact
pub const PDF_FILE_NAME: &str = "document.pdf";

/// Single-flight controller for both export paths
pub struct ExportOrchestrator<E, K, N> {
    surface: E,
    sink: K,
    notifier: N,
    geometry: PageGeometry,
    state: ExportState,
}

impl<E, K, N> ExportOrchestrator<E, K, N>
where
    E: EditorSurface,
    K: ArtifactSink,
    N: StatusNotifier,
{
    /// Create an orchestrator with the default A4 page geometry
    pub fn new(surface: E, sink: K, notifier: N) -> Self {
        Self {
            surface,
            sink,
            notifier,
            geometry: PageGeometry::a4(),
            state: ExportState::new(),
        }
    }

    /// Override the page geometry used by the raster path
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Check whether an export is currently in flight
    ///
    /// UIs use this to disable their export controls.
    pub fn is_exporting(&self) -> bool {
        self.state.is_exporting()
    }

    /// Export the document as a word-processing package
    pub async fn export_docx(&self) -> Result<()> {
        let _guard = self.state.try_begin()?;
        self.notifier.notify("Generating Word document...");

        match self.run_docx_pipeline().await {
            Ok(()) => {
                tracing::info!(file = DOCX_FILE_NAME, "word export finished");
                self.notifier.notify("Word document exported successfully!");
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "word export failed");
                self.notifier
                    .notify("Error exporting Word document. Please try again.");
                Err(err)
            }
        }
    }

    /// Export the document as a paginated raster PDF
    pub async fn export_pdf(&self) -> Result<()> {
        let _guard = self.state.try_begin()?;
        self.notifier.notify("Generating PDF...");

        match self.run_pdf_pipeline().await {
            Ok(()) => {
                tracing::info!(file = PDF_FILE_NAME, "pdf export finished");
                self.notifier.notify("PDF exported successfully!");
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "pdf export failed");
                self.notifier.notify("Error exporting PDF. Please try again.");
                Err(err)
            }
        }
    }

    /// Snapshot -> structured elements -> DOCX package -> sink
    async fn run_docx_pipeline(&self) -> Result<()> {
        let tree = self
            .surface
            .snapshot()
            .ok_or(ExportError::MissingEditorSurface)?;

        let elements = build_elements(&tree);

        // Packaging is CPU-bound; suspend until the blocking task reports back.
        let bytes = task::spawn_blocking(move || store::pack_docx_bytes(&elements))
            .await
            .map_err(|err| ExportError::Packaging(err.to_string()))??;

        self.sink
            .save(DOCX_FILE_NAME, bytes)
            .map_err(|err| ExportError::Delivery(err.to_string()))
    }

    /// Visual surface -> raster image -> page slices -> PDF -> sink
    async fn run_pdf_pipeline(&self) -> Result<()> {
        let image = {
            // The off-screen clone lives only for this scope; Drop tears it
            // down whether or not rasterization succeeds.
            let mut visual = self
                .surface
                .visual_surface()
                .ok_or(ExportError::MissingEditorSurface)?;
            visual.rasterize().await?
        };

        let geometry = self.geometry;
        let slices = slice_into_pages(&image, &geometry)?;

        let bytes =
            task::spawn_blocking(move || store::write_raster_document_bytes(&slices, &geometry))
                .await
                .map_err(|err| ExportError::Packaging(err.to_string()))??;

        self.sink
            .save(PDF_FILE_NAME, bytes)
            .map_err(|err| ExportError::Delivery(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{Block, DocumentTree, Heading, Paragraph};
    use raster_engine::RasterImage;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Visual surface mock; records teardown through a shared flag
    struct MockVisual {
        image: Option<RasterImage>,
        delay: Duration,
        torn_down: Arc<AtomicBool>,
    }

    impl VisualSurface for MockVisual {
        async fn rasterize(&mut self) -> Result<RasterImage> {
            tokio::time::sleep(self.delay).await;
            self.image.take().ok_or(ExportError::EmptySurface)
        }
    }

    impl Drop for MockVisual {
        fn drop(&mut self) {
            self.torn_down.store(true, Ordering::SeqCst);
        }
    }

    #[derive(Default)]
    struct MockEditor {
        tree: Option<DocumentTree>,
        image: Option<RasterImage>,
        render_delay: Duration,
        torn_down: Arc<AtomicBool>,
    }

    impl EditorSurface for MockEditor {
        type Visual = MockVisual;

        fn snapshot(&self) -> Option<DocumentTree> {
            self.tree.clone()
        }

        fn visual_surface(&self) -> Option<MockVisual> {
            Some(MockVisual {
                image: self.image.clone(),
                delay: self.render_delay,
                torn_down: Arc::clone(&self.torn_down),
            })
        }
    }

    #[derive(Default, Clone)]
    struct MockSink {
        saved: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
    }

    impl ArtifactSink for MockSink {
        fn save(&self, file_name: &str, bytes: Vec<u8>) -> std::io::Result<()> {
            self.saved
                .lock()
                .unwrap()
                .push((file_name.to_string(), bytes));
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    struct MockNotifier {
        messages: Arc<Mutex<Vec<String>>>,
    }

    impl StatusNotifier for MockNotifier {
        fn notify(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    /// Sink that always fails, for delivery-error tests
    struct FailingSink;

    impl ArtifactSink for FailingSink {
        fn save(&self, _file_name: &str, _bytes: Vec<u8>) -> std::io::Result<()> {
            Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "disk full",
            ))
        }
    }

    fn sample_tree() -> DocumentTree {
        DocumentTree::from_blocks(vec![
            Block::Heading(Heading::new(1, "Title")),
            Block::Paragraph(Paragraph::from_text("Body")),
        ])
    }

    fn editor_with_content() -> MockEditor {
        MockEditor {
            tree: Some(sample_tree()),
            image: Some(RasterImage::filled(100, 400, [255, 255, 255])),
            render_delay: Duration::from_millis(0),
            torn_down: Arc::new(AtomicBool::new(false)),
        }
    }

    #[tokio::test]
    async fn test_docx_export_saves_fixed_name() {
        let sink = MockSink::default();
        let orchestrator =
            ExportOrchestrator::new(editor_with_content(), sink.clone(), MockNotifier::default());

        orchestrator.export_docx().await.unwrap();

        let saved = sink.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, DOCX_FILE_NAME);
        // DOCX is a ZIP archive.
        assert_eq!(&saved[0].1[0..2], b"PK");
        assert!(!orchestrator.is_exporting());
    }

    #[tokio::test]
    async fn test_pdf_export_saves_fixed_name() {
        let sink = MockSink::default();
        let orchestrator =
            ExportOrchestrator::new(editor_with_content(), sink.clone(), MockNotifier::default());

        orchestrator.export_pdf().await.unwrap();

        let saved = sink.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, PDF_FILE_NAME);
        assert!(saved[0].1.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_second_export_rejected_while_first_runs() {
        let mut editor = editor_with_content();
        editor.render_delay = Duration::from_millis(20);
        let sink = MockSink::default();
        let orchestrator = ExportOrchestrator::new(editor, sink.clone(), MockNotifier::default());

        let (first, second) = tokio::join!(orchestrator.export_pdf(), orchestrator.export_pdf());

        assert!(first.is_ok());
        assert!(matches!(second, Err(ExportError::ExportInProgress)));
        // The rejected request never produced an artifact.
        assert_eq!(sink.saved.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_editor_fails_and_releases_lock() {
        let editor = MockEditor::default(); // no tree, surface yields no image
        let notifier = MockNotifier::default();
        let orchestrator = ExportOrchestrator::new(editor, MockSink::default(), notifier.clone());

        let result = orchestrator.export_docx().await;
        assert!(matches!(result, Err(ExportError::MissingEditorSurface)));
        assert!(!orchestrator.is_exporting());

        // The lock is free again: the next attempt fails the same way rather
        // than being rejected as concurrent.
        let again = orchestrator.export_docx().await;
        assert!(matches!(again, Err(ExportError::MissingEditorSurface)));
    }

    #[tokio::test]
    async fn test_failed_rasterization_tears_down_surface() {
        let mut editor = editor_with_content();
        editor.image = None; // rasterize will fail
        let torn_down = Arc::clone(&editor.torn_down);
        let orchestrator =
            ExportOrchestrator::new(editor, MockSink::default(), MockNotifier::default());

        let result = orchestrator.export_pdf().await;
        assert!(matches!(result, Err(ExportError::EmptySurface)));
        assert!(torn_down.load(Ordering::SeqCst));
        assert!(!orchestrator.is_exporting());
    }

    #[tokio::test]
    async fn test_failure_surfaces_single_notification() {
        let editor = MockEditor::default();
        let notifier = MockNotifier::default();
        let orchestrator = ExportOrchestrator::new(editor, MockSink::default(), notifier.clone());

        let _ = orchestrator.export_pdf().await;

        let messages = notifier.messages.lock().unwrap();
        assert_eq!(
            messages.as_slice(),
            ["Generating PDF...", "Error exporting PDF. Please try again."]
        );
    }

    #[tokio::test]
    async fn test_delivery_failure_reported() {
        let orchestrator =
            ExportOrchestrator::new(editor_with_content(), FailingSink, MockNotifier::default());

        let result = orchestrator.export_docx().await;
        assert!(matches!(result, Err(ExportError::Delivery(_))));
        assert!(!orchestrator.is_exporting());
    }

    #[tokio::test]
    async fn test_empty_tree_still_exports() {
        let mut editor = editor_with_content();
        editor.tree = Some(DocumentTree::new());
        let sink = MockSink::default();
        let orchestrator = ExportOrchestrator::new(editor, sink.clone(), MockNotifier::default());

        orchestrator.export_docx().await.unwrap();
        // The placeholder paragraph keeps the package non-empty.
        assert_eq!(sink.saved.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_custom_geometry_flows_to_slicer() {
        // 100 px on a 100 mm printable width, 300 rows -> 3 pages of 100 mm.
        let mut editor = editor_with_content();
        editor.image = Some(RasterImage::filled(100, 300, [0, 0, 0]));
        let sink = MockSink::default();
        let orchestrator = ExportOrchestrator::new(editor, sink.clone(), MockNotifier::default())
            .with_geometry(PageGeometry::custom(120.0, 120.0, 10.0));

        orchestrator.export_pdf().await.unwrap();

        let saved = sink.saved.lock().unwrap();
        let text = String::from_utf8_lossy(&saved[0].1).to_string();
        assert!(text.contains("/Count 3"));
    }
}
