use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chart_widget::api::{ChartProps, ChartWidget, ChartWidgetConfig, WidgetState};
use chart_widget::core::{ChartType, SeriesData};
use chart_widget::error::ChartError;
use chart_widget::interaction::{ClickEvent, ClickPoint, click_handler};
use chart_widget::render::{RecordingDrawingService, SurfaceId};

fn series_a() -> SeriesData {
    SeriesData::new(vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]).expect("valid series")
}

fn build_widget(series: SeriesData) -> ChartWidget<RecordingDrawingService> {
    let props = ChartProps::new(series, ChartType::Scatter, click_handler(|_| {}));
    ChartWidget::new(
        RecordingDrawingService::new(),
        props,
        ChartWidgetConfig::default(),
    )
}

#[test]
fn new_widget_does_not_draw() {
    let widget = build_widget(series_a());
    assert_eq!(widget.state(), WidgetState::Unattached);
    assert_eq!(widget.service().draw_count(), 0);
    assert!(widget.draw_command().is_none());
}

#[test]
fn attach_draws_once_and_subscribes_once() {
    let mut widget = build_widget(series_a());
    widget.attach(SurfaceId::new("plot")).expect("attach");

    let service = widget.service();
    assert_eq!(service.draw_count(), 1);
    assert_eq!(service.subscribe_calls(), 1);
    assert_eq!(service.live_subscriptions(&SurfaceId::new("plot")), 1);

    let draw = service.last_draw().expect("draw recorded");
    assert_eq!(draw.surface.as_str(), "plot");
    assert_eq!(draw.series.len(), 1);
    assert_eq!(&*draw.series[0].x, &[1.0, 2.0, 3.0]);
    assert_eq!(&*draw.series[0].y, &[4.0, 5.0, 6.0]);
    assert_eq!(draw.series[0].chart_type, ChartType::Scatter);
    assert_eq!(widget.state(), WidgetState::Attached);
    assert_eq!(widget.draw_count(), 1);
}

#[test]
fn update_with_equal_values_in_new_instances_skips_draw() {
    let mut widget = build_widget(series_a());
    widget.attach(SurfaceId::new("plot")).expect("attach");

    let next = widget.props().clone().with_series(series_a());
    let drawn = widget.update(next).expect("update");

    assert!(!drawn);
    assert_eq!(widget.service().draw_count(), 1);
    assert_eq!(widget.service().subscribe_calls(), 1);
}

#[test]
fn update_with_changed_y_draws_new_values() {
    let mut widget = build_widget(series_a());
    widget.attach(SurfaceId::new("plot")).expect("attach");

    let series_b = series_a().with_y(vec![7.0, 8.0, 9.0]).expect("valid series");
    let next = widget.props().clone().with_series(series_b);
    let drawn = widget.update(next).expect("update");

    assert!(drawn);
    assert_eq!(widget.service().draw_count(), 2);
    let draw = widget.service().last_draw().expect("draw recorded");
    assert_eq!(&*draw.series[0].x, &[1.0, 2.0, 3.0]);
    assert_eq!(&*draw.series[0].y, &[7.0, 8.0, 9.0]);
}

#[test]
fn chart_type_change_alone_is_adopted_without_redraw() {
    let mut widget = build_widget(series_a());
    widget.attach(SurfaceId::new("plot")).expect("attach");

    let next = widget.props().clone().with_chart_type(ChartType::Bar);
    assert!(!widget.should_redraw(&next));
    assert!(!widget.update(next).expect("update"));
    assert_eq!(widget.service().draw_count(), 1);
    assert_eq!(widget.props().chart_type, ChartType::Bar);

    let series_b = series_a().with_x(vec![10.0, 20.0, 30.0]).expect("valid series");
    let next = widget.props().clone().with_series(series_b);
    assert!(widget.update(next).expect("update"));
    let draw = widget.service().last_draw().expect("draw recorded");
    assert_eq!(draw.series[0].chart_type, ChartType::Bar);
}

#[test]
fn handler_change_alone_takes_effect_on_next_redraw() {
    let first_hits = Arc::new(AtomicUsize::new(0));
    let second_hits = Arc::new(AtomicUsize::new(0));
    let first = Arc::clone(&first_hits);
    let second = Arc::clone(&second_hits);

    let props = ChartProps::new(
        series_a(),
        ChartType::Line,
        click_handler(move |_| {
            first.fetch_add(1, Ordering::SeqCst);
        }),
    );
    let mut widget = ChartWidget::new(
        RecordingDrawingService::new(),
        props,
        ChartWidgetConfig::default(),
    );
    let surface = SurfaceId::new("plot");
    widget.attach(surface.clone()).expect("attach");

    let next = widget.props().clone().with_on_click(click_handler(move |_| {
        second.fetch_add(1, Ordering::SeqCst);
    }));
    assert!(!widget.update(next).expect("update"));

    let event = ClickEvent::single(ClickPoint {
        curve_number: 0,
        point_number: 1,
        x: 2.0,
        y: 5.0,
    });
    widget.service().emit_click(&surface, &event);
    assert_eq!(first_hits.load(Ordering::SeqCst), 1);
    assert_eq!(second_hits.load(Ordering::SeqCst), 0);

    widget.redraw().expect("forced redraw");
    widget.service().emit_click(&surface, &event);
    assert_eq!(first_hits.load(Ordering::SeqCst), 1);
    assert_eq!(second_hits.load(Ordering::SeqCst), 1);
}

#[test]
fn forced_redraw_with_same_props_repeats_identical_command() {
    let mut widget = build_widget(series_a());
    widget.attach(SurfaceId::new("plot")).expect("attach");
    widget.redraw().expect("forced redraw");

    let draws = widget.service().draws();
    assert_eq!(draws.len(), 2);
    assert_eq!(draws[0], draws[1]);
}

#[test]
fn update_before_attach_stores_props_without_drawing() {
    let mut widget = build_widget(series_a());
    let series_b = series_a().with_y(vec![0.0, 0.0, 0.0]).expect("valid series");
    let next = widget.props().clone().with_series(series_b);

    assert!(!widget.update(next).expect("update"));
    assert_eq!(widget.service().draw_count(), 0);

    widget.attach(SurfaceId::new("plot")).expect("attach");
    let draw = widget.service().last_draw().expect("draw recorded");
    assert_eq!(&*draw.series[0].y, &[0.0, 0.0, 0.0]);
}

#[test]
fn attach_twice_is_rejected() {
    let mut widget = build_widget(series_a());
    widget.attach(SurfaceId::new("plot")).expect("attach");

    let err = widget
        .attach(SurfaceId::new("other"))
        .expect_err("second attach must fail");
    assert!(matches!(
        err,
        ChartError::InvalidLifecycle {
            operation: "attach",
            state: WidgetState::Attached
        }
    ));
    assert_eq!(widget.service().draw_count(), 1);
}

#[test]
fn redraw_requires_attached_widget() {
    let mut widget = build_widget(series_a());
    let err = widget.redraw().expect_err("redraw before attach must fail");
    assert!(matches!(err, ChartError::InvalidLifecycle { .. }));
}

#[test]
fn detach_is_terminal() {
    let mut widget = build_widget(series_a());
    widget.attach(SurfaceId::new("plot")).expect("attach");

    let released = widget.detach().expect("detach");
    assert_eq!(released.as_str(), "plot");
    assert_eq!(widget.state(), WidgetState::Detached);
    assert!(widget.surface().is_none());

    assert!(widget.redraw().is_err());
    assert!(widget.attach(SurfaceId::new("plot")).is_err());
    assert!(widget.detach().is_err());
    let next = widget
        .props()
        .clone()
        .with_series(series_a().with_y(vec![1.0, 1.0, 1.0]).expect("valid series"));
    assert!(widget.update(next).is_err());
    assert_eq!(widget.service().draw_count(), 1);
}

#[test]
fn drawing_service_error_propagates_unchanged() {
    let mut widget = build_widget(series_a());
    widget.service_mut().fail_next_draw("surface lost");

    let err = widget
        .attach(SurfaceId::new("plot"))
        .expect_err("draw failure must propagate");
    match err {
        ChartError::DrawingService(message) => assert_eq!(message, "surface lost"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(widget.state(), WidgetState::Attached);
    assert_eq!(widget.draw_count(), 0);
    assert_eq!(widget.service().subscribe_calls(), 0);

    widget.redraw().expect("redraw after transient failure");
    assert_eq!(widget.service().draw_count(), 1);
}

#[test]
fn empty_series_still_draws() {
    let mut widget = build_widget(SeriesData::empty());
    widget.attach(SurfaceId::new("plot")).expect("attach");

    let draw = widget.service().last_draw().expect("draw recorded");
    assert!(draw.series[0].x.is_empty());
    assert_eq!(draw.point_count(), 0);
}

#[test]
fn failed_attach_needs_explicit_redraw_before_content_appears() {
    let mut widget = build_widget(series_a());
    widget.service_mut().fail_next_draw("surface not ready");
    assert!(widget.attach(SurfaceId::new("plot")).is_err());

    let next = widget.props().clone().with_series(series_a());
    assert!(!widget.update(next).expect("update"));
    assert_eq!(widget.service().draw_count(), 0);

    widget.redraw().expect("host-driven recovery");
    assert_eq!(widget.service().draw_count(), 1);
    assert_eq!(widget.service().subscribe_calls(), 1);
}

#[test]
fn empty_surface_id_is_rejected_without_attaching() {
    let mut widget = build_widget(series_a());

    let err = widget
        .attach(SurfaceId::new(""))
        .expect_err("empty surface must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(widget.state(), WidgetState::Unattached);
    assert!(widget.surface().is_none());
    assert_eq!(widget.service().draw_count(), 0);

    widget.attach(SurfaceId::new("plot")).expect("attach");
    assert_eq!(widget.state(), WidgetState::Attached);
}
