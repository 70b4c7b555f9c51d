use std::collections::HashMap;

use contracts::dashboard::ChartsPayload;
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

use super::{ChartKind, ChartSlot, CHART_SLOTS};

/// Live Chart.js instances keyed by canvas id.
///
/// Bar and pie charts are created once and then updated in place. The
/// funnel is destroyed and rebuilt on every render.
#[derive(Default)]
pub struct ChartRegistry {
    instances: HashMap<&'static str, JsValue>,
    plugins_registered: bool,
}

impl ChartRegistry {
    pub fn render_all(&mut self, charts: &ChartsPayload) {
        for slot in CHART_SLOTS.iter() {
            if let Err(err) = self.render(slot, charts) {
                log::error!("Failed to render chart {}: {:?}", slot.canvas_id, err);
            }
        }
    }

    pub fn destroy_all(&mut self) {
        for (id, chart) in self.instances.drain() {
            if let Err(err) = call_method(&chart, "destroy") {
                log::warn!("Failed to destroy chart {}: {:?}", id, err);
            }
        }
    }

    fn render(&mut self, slot: &ChartSlot, charts: &ChartsPayload) -> Result<(), JsValue> {
        let (labels, values) = slot.points(charts);

        if slot.kind == ChartKind::Funnel {
            if let Some(old) = self.instances.remove(slot.canvas_id) {
                call_method(&old, "destroy")?;
            }
        } else if let Some(chart) = self.instances.get(slot.canvas_id) {
            return update_in_place(chart, &labels, &values);
        }

        let ctor = chart_constructor()?;
        if !self.plugins_registered {
            register_datalabels(&ctor)?;
            self.plugins_registered = true;
        }

        let Some(canvas) = find_canvas(slot.canvas_id) else {
            log::warn!("Canvas {} not found, skipping chart", slot.canvas_id);
            return Ok(());
        };
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context not available"))?;

        let config = to_js(&slot.config(&labels, &values))?;
        if slot.kind == ChartKind::Funnel {
            attach_funnel_tooltip_filter(&config)?;
        }

        let chart = Reflect::construct(&ctor, &Array::of2(&context.into(), &config))?;
        self.instances.insert(slot.canvas_id, chart);
        Ok(())
    }
}

fn chart_constructor() -> Result<Function, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let value = Reflect::get(&window, &JsValue::from_str("Chart"))?;
    if !value.is_function() {
        return Err(JsValue::from_str("Chart.js is not loaded"));
    }
    value.dyn_into()
}

fn register_datalabels(ctor: &Function) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let plugin = Reflect::get(&window, &JsValue::from_str("ChartDataLabels"))?;
    if plugin.is_undefined() {
        log::warn!("chartjs-plugin-datalabels is not loaded");
        return Ok(());
    }
    let register: Function = Reflect::get(ctor, &JsValue::from_str("register"))?.dyn_into()?;
    register.call1(ctor, &plugin)?;
    Ok(())
}

fn find_canvas(id: &str) -> Option<HtmlCanvasElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()
}

fn update_in_place(chart: &JsValue, labels: &[String], values: &[f64]) -> Result<(), JsValue> {
    let data = Reflect::get(chart, &JsValue::from_str("data"))?;
    Reflect::set(&data, &JsValue::from_str("labels"), &to_js(labels)?)?;
    let datasets = Reflect::get(&data, &JsValue::from_str("datasets"))?;
    let first = Reflect::get_u32(&datasets, 0)?;
    Reflect::set(&first, &JsValue::from_str("data"), &to_js(values)?)?;
    call_method(chart, "update")
}

/// Hides the spacer dataset from tooltips. Functions cannot travel through
/// JSON, so this is set on the converted config.
fn attach_funnel_tooltip_filter(config: &JsValue) -> Result<(), JsValue> {
    let options = Reflect::get(config, &JsValue::from_str("options"))?;
    let plugins = Reflect::get(&options, &JsValue::from_str("plugins"))?;
    let tooltip = js_sys::Object::new();
    let filter = Function::new_with_args("item", "return item.datasetIndex === 1;");
    Reflect::set(&tooltip, &JsValue::from_str("filter"), &filter)?;
    Reflect::set(&plugins, &JsValue::from_str("tooltip"), &tooltip)?;
    Ok(())
}

fn call_method(target: &JsValue, name: &str) -> Result<(), JsValue> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    method.call0(target)?;
    Ok(())
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}
