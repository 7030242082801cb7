<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Review page navigation link</description>
   <name>lnk_Review</name>
   <tag></tag>
   <elementGuidId>common-nav-review</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//a[contains(text(), 'Review') or @href='/review']</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>a[href='/review'], nav a:contains('Review')</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
