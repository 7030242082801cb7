<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Photo grid container on review page</description>
   <name>div_PhotoGrid</name>
   <tag></tag>
   <elementGuidId>review-photo-grid</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//div[contains(@class, 'grid') and .//img]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>[data-testid='photo-grid'], .photo-grid, div.grid</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
