use anyhow::{anyhow, Context};
use app_core::Garment;
use glam::{Mat4, Vec3};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Flattened, world-space mesh ready for GPU upload.
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

/// Fetches and parses a garment's GLB. Fire-and-forget at startup; the
/// caller marks the garment present only on success.
pub async fn load_garment(g: Garment) -> anyhow::Result<MeshData> {
    let bytes = fetch_bytes(g.model_url()).await?;
    log::info!("[load] fetched {} ({} bytes)", g.model_url(), bytes.len());
    parse_glb(&bytes)
}

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!(format!("fetch {url}: {:?}", e)))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        return Err(anyhow!("fetch {url}: HTTP {}", resp.status()));
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow!(format!("{:?}", e)))?,
    )
    .await
    .map_err(|e| anyhow!(format!("{:?}", e)))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Walks the glTF scene graph and flattens every triangle primitive into a
/// single indexed mesh, baking node transforms and the material base color.
pub fn parse_glb(bytes: &[u8]) -> anyhow::Result<MeshData> {
    let (document, buffers, _images) = gltf::import_slice(bytes).context("parse glb")?;

    let mut mesh = MeshData {
        positions: Vec::new(),
        normals: Vec::new(),
        colors: Vec::new(),
        indices: Vec::new(),
    };

    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or_else(|| anyhow!("no scene in model"))?;
    for node in scene.nodes() {
        collect_node(&node, &buffers, Mat4::IDENTITY, &mut mesh);
    }

    if mesh.positions.is_empty() {
        return Err(anyhow!("model has no triangle geometry"));
    }
    Ok(mesh)
}

fn collect_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent: Mat4,
    out: &mut MeshData,
) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());

    if let Some(mesh) = node.mesh() {
        for prim in mesh.primitives() {
            if prim.mode() != gltf::mesh::Mode::Triangles {
                continue;
            }
            let reader = prim.reader(|b| buffers.get(b.index()).map(|d| &*d.0));
            let Some(pos_iter) = reader.read_positions() else {
                continue;
            };
            let positions: Vec<[f32; 3]> = pos_iter.collect();
            let indices: Vec<u32> = reader
                .read_indices()
                .map(|it| it.into_u32().collect())
                .unwrap_or_else(|| (0..positions.len() as u32).collect());
            let normals: Vec<[f32; 3]> = match reader.read_normals() {
                Some(it) => it.collect(),
                None => smooth_normals(&positions, &indices),
            };
            let base = prim
                .material()
                .pbr_metallic_roughness()
                .base_color_factor();

            let offset = out.positions.len() as u32;
            for (i, p) in positions.iter().enumerate() {
                let wp = world.transform_point3(Vec3::from(*p));
                let n = normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]);
                let wn = world.transform_vector3(Vec3::from(n)).normalize_or_zero();
                out.positions.push(wp.to_array());
                out.normals.push(wn.to_array());
                out.colors.push([base[0], base[1], base[2]]);
            }
            out.indices.extend(indices.iter().map(|i| offset + i));
        }
    }

    for child in node.children() {
        collect_node(&child, buffers, world, out);
    }
}

/// Area-weighted vertex normals for primitives that ship without them.
fn smooth_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let pa = Vec3::from(positions[a]);
        let pb = Vec3::from(positions[b]);
        let pc = Vec3::from(positions[c]);
        let n = (pb - pa).cross(pc - pa);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    acc.into_iter()
        .map(|n| n.normalize_or(Vec3::Y).to_array())
        .collect()
}
