use geo_types::{
    Geometry as GeoGeometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};
use geozero::wkb::Ewkb;
use geozero::{CoordDimensions, ToGeo, ToWkb};

use crate::geometry::interchange::{Geometry, Position};
use crate::geometry::GeometryError;

/// Every record is stored under WGS84; there is no per-record override.
pub const SRID_WGS84: i32 = 4326;

/// Encode an interchange geometry as EWKB tagged with SRID 4326.
///
/// Coordinates are written verbatim, including any interior rings a
/// Polygon/MultiPolygon payload carries. No reprojection.
pub fn encode(geometry: &Geometry) -> Result<Vec<u8>, GeometryError> {
    let geom = to_geo(geometry)?;
    Ok(geom.to_ewkb(CoordDimensions::xy(), Some(SRID_WGS84))?)
}

/// Decode EWKB bytes into interchange form.
///
/// The kind is taken from the decoded value itself, never from the stored
/// `type` label. Polygon and MultiPolygon project only the exterior ring;
/// interior rings present in storage are dropped.
pub fn decode(ewkb: &[u8]) -> Result<Geometry, GeometryError> {
    let geom = Ewkb(ewkb).to_geo()?;
    from_geo(&geom)
}

fn to_geo(geometry: &Geometry) -> Result<GeoGeometry<f64>, GeometryError> {
    let geom = match geometry {
        Geometry::Point { coordinates } => GeoGeometry::Point(point(coordinates)),
        Geometry::LineString { coordinates } => GeoGeometry::LineString(line_string(coordinates)),
        Geometry::Polygon { coordinates } => GeoGeometry::Polygon(polygon(coordinates)?),
        Geometry::MultiPoint { coordinates } => {
            GeoGeometry::MultiPoint(MultiPoint::new(coordinates.iter().map(point).collect()))
        }
        Geometry::MultiLineString { coordinates } => GeoGeometry::MultiLineString(
            MultiLineString::new(coordinates.iter().map(|line| line_string(line)).collect()),
        ),
        Geometry::MultiPolygon { coordinates } => GeoGeometry::MultiPolygon(MultiPolygon::new(
            coordinates
                .iter()
                .map(|rings| polygon(rings))
                .collect::<Result<Vec<_>, _>>()?,
        )),
    };
    Ok(geom)
}

fn from_geo(geom: &GeoGeometry<f64>) -> Result<Geometry, GeometryError> {
    let geometry = match geom {
        GeoGeometry::Point(p) => Geometry::Point { coordinates: [p.x(), p.y()] },
        GeoGeometry::LineString(line) => Geometry::LineString { coordinates: positions(line) },
        GeoGeometry::Polygon(poly) => Geometry::Polygon {
            coordinates: vec![positions(poly.exterior())],
        },
        GeoGeometry::MultiPoint(points) => Geometry::MultiPoint {
            coordinates: points.iter().map(|p| [p.x(), p.y()]).collect(),
        },
        GeoGeometry::MultiLineString(lines) => Geometry::MultiLineString {
            coordinates: lines.iter().map(positions).collect(),
        },
        GeoGeometry::MultiPolygon(polys) => Geometry::MultiPolygon {
            coordinates: polys.iter().map(|poly| vec![positions(poly.exterior())]).collect(),
        },
        other => return Err(GeometryError::UnsupportedKind(kind_name(other))),
    };
    Ok(geometry)
}

fn point(position: &Position) -> Point<f64> {
    Point::new(position[0], position[1])
}

fn line_string(positions: &[Position]) -> LineString<f64> {
    LineString::from(positions.iter().map(|p| (p[0], p[1])).collect::<Vec<_>>())
}

fn polygon(rings: &[Vec<Position>]) -> Result<Polygon<f64>, GeometryError> {
    let (exterior, interiors) = rings.split_first().ok_or(GeometryError::EmptyPolygon)?;
    Ok(Polygon::new(
        line_string(exterior),
        interiors.iter().map(|ring| line_string(ring)).collect(),
    ))
}

fn positions(line: &LineString<f64>) -> Vec<Position> {
    line.coords().map(|c| [c.x, c.y]).collect()
}

fn kind_name(geom: &GeoGeometry<f64>) -> &'static str {
    match geom {
        GeoGeometry::GeometryCollection(_) => "GeometryCollection",
        GeoGeometry::Line(_) => "Line",
        GeoGeometry::Rect(_) => "Rect",
        GeoGeometry::Triangle(_) => "Triangle",
        _ => "unknown",
    }
}
