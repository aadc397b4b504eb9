use crate::metadata::value::Number;
use crate::metadata::{ComponentType, MetadataValue, PropertyDescriptor, Vec2Value};

/// Apply normalization, then `value * scale + offset`, to a numeric scalar or vec2.
///
/// Integers of non-normalized properties and non-numeric values are returned unchanged.
/// Normalized results are always `f64`; otherwise the result is `f32` unless the value or an
/// operand is `f64`.
pub fn apply_transform(descriptor: &PropertyDescriptor, value: MetadataValue) -> MetadataValue {
	if !descriptor.is_transformable() {
		return value;
	}

	let transformed = match &value {
		MetadataValue::Vec2(vec) => transform_components(descriptor, vec.component_type(), vec.numbers()).map(|Transformed { values, wide }| {
			if wide {
				MetadataValue::Vec2(Vec2Value::Float64(values))
			} else {
				MetadataValue::Vec2(Vec2Value::Float32(values.map(|item| item as f32)))
			}
		}),
		scalar => match (scalar.component_type(), scalar.as_number()) {
			(Some(component), Some(number)) => transform_components(descriptor, component, [number]).map(|Transformed { values: [item], wide }| {
				if wide { MetadataValue::Float64(item) } else { MetadataValue::Float32(item as f32) }
			}),
			_ => None,
		},
	};
	transformed.unwrap_or(value)
}

struct Transformed<const N: usize> {
	values: [f64; N],
	wide: bool,
}

fn transform_components<const N: usize>(descriptor: &PropertyDescriptor, component: ComponentType, input: [Number; N]) -> Option<Transformed<N>> {
	let normalize = component.is_integer();
	if normalize && !descriptor.normalized {
		return None;
	}
	if !normalize && descriptor.offset.is_none() && descriptor.scale.is_none() {
		return None;
	}

	let (scale, scale_wide) = operand(descriptor.scale.as_ref(), 1.0);
	let (offset, offset_wide) = operand(descriptor.offset.as_ref(), 0.0);
	let wide = normalize || component == ComponentType::Float64 || scale_wide || offset_wide;

	let mut values = [0.0_f64; N];
	for (idx, (out, number)) in values.iter_mut().zip(input).enumerate() {
		let lane = idx.min(1);
		let base = match number {
			Number::Int(raw) => normalize_integer(raw, component),
			other => other.to_f64(),
		};
		*out = if wide {
			base * scale[lane] + offset[lane]
		} else {
			f64::from(base as f32 * scale[lane] as f32 + offset[lane] as f32)
		};
	}

	Some(Transformed { values, wide })
}

/// Operand as two lanes plus whether it forces `f64` output.
fn operand(value: Option<&MetadataValue>, identity: f64) -> ([f64; 2], bool) {
	let Some(value) = value else {
		return ([identity; 2], false);
	};

	let wide = value.component_type() == Some(ComponentType::Float64);
	let lanes = match value {
		MetadataValue::Vec2(vec) => vec.numbers().map(Number::to_f64),
		scalar => [scalar.as_number().map_or(identity, Number::to_f64); 2],
	};
	(lanes, wide)
}

fn normalize_integer(raw: i128, component: ComponentType) -> f64 {
	let max = match component {
		ComponentType::Int8 => f64::from(i8::MAX),
		ComponentType::Uint8 => f64::from(u8::MAX),
		ComponentType::Int16 => f64::from(i16::MAX),
		ComponentType::Uint16 => f64::from(u16::MAX),
		ComponentType::Int32 => f64::from(i32::MAX),
		ComponentType::Uint32 => f64::from(u32::MAX),
		ComponentType::Int64 => i64::MAX as f64,
		ComponentType::Uint64 => u64::MAX as f64,
		ComponentType::Float32 | ComponentType::Float64 => return raw as f64,
	};

	let normalized = raw as f64 / max;
	if component.is_signed() { normalized.max(-1.0) } else { normalized }
}
