//! Sunrise/sunset lookup table.
//!
//! One `[sunrise, sunset]` pair in HHmm per calendar day, indexed by
//! `[month - 1][day - 1]`.  Values are for 52.09°N 5.12°E in fixed UTC+1
//! (no daylight saving).  Slots for days that do not exist hold `[0, 0]`
//! and are unreachable through [`CalendarDate`].

use crate::calendar::{CalendarDate, ClockTime};

/// Sunrise and sunset for a date.
///
/// The table is indexed without further checks; `CalendarDate` guarantees
/// the month and day are in range.
pub fn lookup(date: CalendarDate) -> (ClockTime, ClockTime) {
    let [rise, set] = SUN_TABLE[date.month() as usize - 1][date.day() as usize - 1];
    (as_clock_time(rise), as_clock_time(set))
}

fn as_clock_time(hhmm: u16) -> ClockTime {
    ClockTime::from_hhmm(hhmm).unwrap_or(ClockTime::MIDNIGHT)
}

#[rustfmt::skip]
static SUN_TABLE: [[[u16; 2]; 31]; 12] = [
    // January
    [
        [848, 1637], [848, 1638], [848, 1639], [847, 1641], [847, 1642], [847, 1643],
        [846, 1644], [846, 1646], [845, 1647], [845, 1648], [844, 1650], [843, 1651],
        [843, 1653], [842, 1654], [841, 1656], [840, 1657], [839, 1659], [838, 1700],
        [837, 1702], [836, 1704], [835, 1705], [834, 1707], [833, 1709], [832, 1711],
        [830, 1712], [829, 1714], [828, 1716], [826, 1718], [825, 1720], [823, 1722],
        [822, 1723],
    ],
    // February
    [
        [820, 1725], [819, 1727], [817, 1729], [815, 1731], [814, 1733], [812, 1735],
        [810, 1737], [809, 1738], [807, 1740], [805, 1742], [803, 1744], [801, 1746],
        [800, 1748], [758, 1750], [756, 1752], [754, 1754], [752, 1756], [750, 1757],
        [748, 1759], [746, 1801], [744, 1803], [742, 1805], [740, 1807], [737, 1809],
        [735, 1811], [733, 1812], [731, 1814], [729, 1816], [727, 1818], [0, 0],
        [0, 0],
    ],
    // March
    [
        [725, 1820], [722, 1822], [720, 1823], [718, 1825], [716, 1827], [713, 1829],
        [711, 1831], [709, 1832], [707, 1834], [704, 1836], [702, 1838], [700, 1839],
        [657, 1841], [655, 1843], [653, 1845], [650, 1846], [648, 1848], [646, 1850],
        [643, 1852], [641, 1853], [639, 1855], [636, 1857], [634, 1858], [632, 1900],
        [629, 1902], [627, 1904], [625, 1905], [622, 1907], [620, 1909], [618, 1910],
        [615, 1912],
    ],
    // April
    [
        [613, 1914], [611, 1915], [608, 1917], [606, 1919], [604, 1921], [602, 1922],
        [559, 1924], [557, 1926], [555, 1927], [552, 1929], [550, 1931], [548, 1932],
        [546, 1934], [543, 1936], [541, 1937], [539, 1939], [537, 1941], [535, 1943],
        [533, 1944], [530, 1946], [528, 1948], [526, 1949], [524, 1951], [522, 1953],
        [520, 1954], [518, 1956], [516, 1958], [514, 1959], [512, 2001], [510, 2003],
        [0, 0],
    ],
    // May
    [
        [508, 2005], [506, 2006], [504, 2008], [502, 2010], [501, 2011], [459, 2013],
        [457, 2014], [455, 2016], [454, 2018], [452, 2019], [450, 2021], [449, 2023],
        [447, 2024], [446, 2026], [444, 2027], [443, 2029], [441, 2030], [440, 2032],
        [438, 2033], [437, 2035], [436, 2036], [434, 2038], [433, 2039], [432, 2040],
        [431, 2042], [430, 2043], [429, 2044], [428, 2045], [427, 2047], [426, 2048],
        [425, 2049],
    ],
    // June
    [
        [424, 2050], [423, 2051], [423, 2052], [422, 2053], [421, 2054], [421, 2055],
        [420, 2056], [420, 2057], [419, 2058], [419, 2059], [419, 2059], [418, 2100],
        [418, 2101], [418, 2101], [418, 2102], [418, 2102], [418, 2103], [418, 2103],
        [418, 2103], [418, 2104], [419, 2104], [419, 2104], [419, 2104], [420, 2104],
        [420, 2104], [420, 2104], [421, 2104], [422, 2104], [422, 2104], [423, 2103],
        [0, 0],
    ],
    // July
    [
        [423, 2103], [424, 2103], [425, 2102], [426, 2102], [427, 2101], [428, 2101],
        [429, 2100], [430, 2059], [431, 2059], [432, 2058], [433, 2057], [434, 2056],
        [435, 2055], [436, 2054], [438, 2053], [439, 2052], [440, 2051], [441, 2050],
        [443, 2049], [444, 2048], [446, 2046], [447, 2045], [448, 2044], [450, 2042],
        [451, 2041], [453, 2039], [454, 2038], [456, 2036], [457, 2035], [459, 2033],
        [500, 2032],
    ],
    // August
    [
        [502, 2030], [504, 2028], [505, 2027], [507, 2025], [508, 2023], [510, 2021],
        [511, 2019], [513, 2017], [515, 2016], [516, 2014], [518, 2012], [520, 2010],
        [521, 2008], [523, 2006], [524, 2004], [526, 2002], [528, 2000], [529, 1958],
        [531, 1955], [533, 1953], [534, 1951], [536, 1949], [537, 1947], [539, 1945],
        [541, 1942], [542, 1940], [544, 1938], [546, 1936], [547, 1934], [549, 1931],
        [550, 1929],
    ],
    // September
    [
        [552, 1927], [554, 1924], [555, 1922], [557, 1920], [559, 1917], [600, 1915],
        [602, 1913], [603, 1910], [605, 1908], [607, 1906], [608, 1903], [610, 1901],
        [611, 1859], [613, 1856], [615, 1854], [616, 1852], [618, 1849], [619, 1847],
        [621, 1845], [623, 1842], [624, 1840], [626, 1837], [628, 1835], [629, 1833],
        [631, 1830], [633, 1828], [634, 1826], [636, 1823], [638, 1821], [639, 1819],
        [0, 0],
    ],
    // October
    [
        [641, 1816], [643, 1814], [644, 1812], [646, 1809], [648, 1807], [649, 1805],
        [651, 1802], [653, 1800], [654, 1758], [656, 1756], [658, 1753], [700, 1751],
        [701, 1749], [703, 1747], [705, 1745], [707, 1742], [708, 1740], [710, 1738],
        [712, 1736], [714, 1734], [716, 1732], [717, 1730], [719, 1728], [721, 1726],
        [723, 1724], [725, 1722], [727, 1720], [728, 1718], [730, 1716], [732, 1714],
        [734, 1712],
    ],
    // November
    [
        [736, 1710], [738, 1709], [739, 1707], [741, 1705], [743, 1703], [745, 1702],
        [747, 1700], [749, 1658], [751, 1657], [752, 1655], [754, 1654], [756, 1652],
        [758, 1651], [800, 1649], [801, 1648], [803, 1647], [805, 1645], [807, 1644],
        [808, 1643], [810, 1642], [812, 1641], [813, 1639], [815, 1638], [817, 1637],
        [818, 1636], [820, 1636], [821, 1635], [823, 1634], [824, 1633], [826, 1632],
        [0, 0],
    ],
    // December
    [
        [827, 1632], [828, 1631], [830, 1630], [831, 1630], [832, 1630], [834, 1629],
        [835, 1629], [836, 1628], [837, 1628], [838, 1628], [839, 1628], [840, 1628],
        [841, 1628], [842, 1628], [843, 1628], [843, 1628], [844, 1628], [845, 1629],
        [845, 1629], [846, 1629], [846, 1630], [847, 1630], [847, 1631], [847, 1632],
        [848, 1632], [848, 1633], [848, 1634], [848, 1635], [848, 1635], [848, 1636],
        [848, 1637],
    ],
];
