//! JavaScript bindings
//!
//! Vectors and quaternions cross the boundary as plain number arrays,
//! `[x, y, z]` and `[w, x, y, z]`. Matrices are arrays of row arrays.

use wasm_bindgen::prelude::*;

use crate::math::{Matrix, Quaternion, Vec3, rotate_vec as rotate};

#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

fn to_vec3(values: &[f64]) -> Result<Vec3, JsError> {
    match values {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(JsError::new(&format!(
            "Expected 3 vector components, got {}",
            values.len()
        ))),
    }
}

fn to_quaternion(values: &[f64]) -> Result<Quaternion, JsError> {
    match values {
        [w, x, y, z] => Ok(Quaternion::new(*w, *x, *y, *z)),
        _ => Err(JsError::new(&format!(
            "Expected 4 quaternion components, got {}",
            values.len()
        ))),
    }
}

fn to_matrix(rows: &js_sys::Array) -> Result<Matrix, JsError> {
    let mut values = Vec::with_capacity(rows.length() as usize);
    for (r, row) in rows.iter().enumerate() {
        let row: js_sys::Array = row
            .dyn_into()
            .map_err(|_| JsError::new(&format!("Matrix row {r} is not an array")))?;
        let mut cells = Vec::with_capacity(row.length() as usize);
        for (c, cell) in row.iter().enumerate() {
            let value = cell
                .as_f64()
                .ok_or_else(|| JsError::new(&format!("Matrix value at {r},{c} is not a number")))?;
            cells.push(value);
        }
        values.push(cells);
    }
    Ok(Matrix::new(values))
}

fn from_matrix(matrix: &Matrix) -> js_sys::Array {
    matrix
        .values()
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| JsValue::from_f64(*v))
                .collect::<js_sys::Array>()
        })
        .collect()
}

#[wasm_bindgen]
pub fn vec3_cross(a: &[f64], b: &[f64]) -> Result<Vec<f64>, JsError> {
    Ok(Vec3::cross(to_vec3(a)?, to_vec3(b)?).to_array().to_vec())
}

#[wasm_bindgen]
pub fn vec3_angle(a: &[f64], b: &[f64]) -> Result<f64, JsError> {
    Ok(Vec3::angle(to_vec3(a)?, to_vec3(b)?))
}

#[wasm_bindgen]
pub fn quaternion_multiply(lhs: &[f64], rhs: &[f64]) -> Result<Vec<f64>, JsError> {
    let product = Quaternion::multiply(to_quaternion(lhs)?, to_quaternion(rhs)?);
    Ok(product.to_array().to_vec())
}

#[wasm_bindgen]
pub fn quaternion_from_euler_angles(x: f64, y: f64, z: f64) -> Vec<f64> {
    Quaternion::from_euler_angles(x, y, z).to_array().to_vec()
}

#[wasm_bindgen]
pub fn quaternion_to_euler_angles(q: &[f64]) -> Result<Vec<f64>, JsError> {
    Ok(to_quaternion(q)?.to_euler_angles().to_array().to_vec())
}

#[wasm_bindgen]
pub fn rotate_vec(q: &[f64], v: &[f64]) -> Result<Vec<f64>, JsError> {
    Ok(rotate(to_quaternion(q)?, to_vec3(v)?).to_array().to_vec())
}

#[wasm_bindgen]
pub fn matrix_multiply(a: js_sys::Array, b: js_sys::Array) -> Result<js_sys::Array, JsError> {
    let product = Matrix::multiply(&to_matrix(&a)?, &to_matrix(&b)?)
        .map_err(|e| JsError::new(&e.to_string()))?;
    Ok(from_matrix(&product))
}

/// Rows joined by newlines, values by single spaces
#[wasm_bindgen]
pub fn matrix_display(m: js_sys::Array) -> Result<String, JsError> {
    Ok(to_matrix(&m)?.to_string())
}
