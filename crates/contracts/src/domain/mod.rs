pub mod a001_producto;
pub mod a002_proveedor;
pub mod a003_pedido;
pub mod a004_venta;
pub mod a005_orden_proveedor;
pub mod registry;
